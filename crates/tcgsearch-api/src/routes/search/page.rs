//! Search page rendering
//!
//! Endpoints:
//! - page_search: Full page, or only the results grid for HTMX requests
//!
//! Helper functions:
//! - load_page_data: Concurrent games + search fetch with empty-list fallback
//! - render_search_bar / render_results / render_card: HTML fragments

use crate::AppState;
use serde::Deserialize;
use tcgsearch_client::{or_empty, PricingApi, SearchQuery};
use tcgsearch_core::{CardSummary, Game, PLACEHOLDER};
use tcgsearch_utils::escape_html;

pub const PAGE_TITLE: &str = "JustTCG Card Search";
pub const EMPTY_STATE_TITLE: &str = "Search for cards";

/// Query string of the search page
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub game: Option<String>,
}

impl SearchParams {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.q.as_deref(), self.game.as_deref())
    }
}

/// Everything the page needs, already degraded on failure
#[derive(Debug, Default)]
pub struct PageData {
    pub games: Vec<Game>,
    pub results: Vec<CardSummary>,
}

/// Fetch the games list and the search results concurrently.
///
/// Either side failing only empties that side. An empty query skips the
/// upstream search entirely.
pub async fn load_page_data(api: &dyn PricingApi, query: &SearchQuery) -> PageData {
    let search = async {
        if query.is_empty() {
            Ok(Vec::new())
        } else {
            api.search_cards(query).await
        }
    };
    let (games, cards) = tokio::join!(api.games(), search);

    let cards = or_empty(cards, "search results");
    PageData {
        games: or_empty(games, "games list"),
        results: cards.iter().map(CardSummary::from_card).collect(),
    }
}

/// Search page - the only page route
pub async fn page_search(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<SearchParams>,
) -> axum::response::Response {
    let query = params.to_query();
    let data = load_page_data(state.api.as_ref(), &query).await;
    log::debug!(
        "Rendering search page: q={:?} game={:?} results={}",
        query.text(),
        query.game(),
        data.results.len()
    );

    if crate::is_htmx_request(&headers) {
        return crate::page_response(render_results(&data.results));
    }

    let inner_content = format!(
        r#"<h1 class='text-2xl font-bold mb-6'>Secure TCG Search</h1>
        <div class='mb-8'>{}</div>
        <div id='search-results'>{}</div>
        <script>{}</script>"#,
        render_search_bar(&query, &data.games),
        render_results(&data.results),
        SEARCH_SCRIPT
    );

    crate::page_response(crate::base_html(PAGE_TITLE, &crate::page_layout(&inner_content)))
}

/// Escape clears the query in place: drop `q` from the URL and refresh the grid.
/// Back and forward re-fetch the grid for the restored URL and resync the form.
const SEARCH_SCRIPT: &str = r#"
function loadResults(url) {
    htmx.ajax('GET', url, { target: '#search-results', swap: 'innerHTML' });
}

function clearSearch() {
    const input = document.getElementById('search');
    const params = new URLSearchParams(window.location.search);
    params.delete('q');
    const qs = params.toString();
    const url = qs ? '/?' + qs : '/';
    history.pushState(null, '', url);
    if (input) {
        input.value = '';
        input.focus();
    }
    loadResults(url);
}

window.addEventListener('popstate', function () {
    const params = new URLSearchParams(window.location.search);
    const input = document.getElementById('search');
    if (input) {
        input.value = params.get('q') || '';
    }
    const game = document.getElementById('game');
    if (game) {
        game.value = params.get('game') || '';
    }
    loadResults(window.location.pathname + window.location.search);
});
"#;

/// Link that clears `q` while keeping the game filter
pub fn clear_href(query: &SearchQuery) -> String {
    match query.game() {
        Some(game) => format!("/?game={}", urlencoding::encode(game)),
        None => "/".to_string(),
    }
}

/// Search form: text input, game filter, clear and submit buttons
pub fn render_search_bar(query: &SearchQuery, games: &[Game]) -> String {
    let selected_game = query.game().unwrap_or("");

    let mut options = format!(
        "<option value=''{}>All Games</option>",
        if selected_game.is_empty() { " selected" } else { "" }
    );
    for game in games {
        options.push_str(&format!(
            "<option value='{}'{}>{}</option>",
            escape_html(&game.slug),
            if game.slug == selected_game { " selected" } else { "" },
            escape_html(&game.name)
        ));
    }

    format!(
        r#"<form method='get' action='/' class='relative w-full'>
    <label for='search' class='sr-only'>Search cards</label>
    <div class='relative'>
        <span class='absolute inset-y-0 left-3 flex items-center pointer-events-none'>
            <svg class='h-5 w-5 text-gray-400' viewBox='0 0 24 24' fill='none' aria-hidden='true'>
                <path d='M21 21l-4.35-4.35' stroke='currentColor' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
                <circle cx='11' cy='11' r='6' stroke='currentColor' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
            </svg>
        </span>
        <input id='search' name='q' value='{}' placeholder='Search card name, set, or keyword' aria-label='Search cards'
            onkeydown="if (event.key === 'Escape') {{ event.preventDefault(); clearSearch(); }}"
            class='block w-full rounded-xl border border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-900/50 py-3 pl-12 pr-48 text-sm placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-400 transition'>
        <select id='game' name='game' aria-label='Filter by game'
            class='absolute right-28 top-1/2 -translate-y-1/2 w-36 rounded-lg border border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-900/50 text-sm text-gray-700 dark:text-gray-100 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-400 shadow-sm'>
            {}
        </select>
        <a href='{}' onclick='clearSearch(); return false;' aria-label='Clear search' title='Clear'
            class='absolute inset-y-0 right-40 flex items-center px-3 text-sm text-gray-500 hover:text-gray-700 dark:hover:text-gray-300 transition'>
            <svg class='h-4 w-4' viewBox='0 0 24 24' fill='none' aria-hidden='true'>
                <path d='M18 6L6 18M6 6l12 12' stroke='currentColor' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
            </svg>
        </a>
        <button type='submit' aria-label='Search'
            class='absolute right-1 top-1/2 -translate-y-1/2 rounded-lg bg-gradient-to-br from-indigo-600 to-violet-600 text-white px-4 py-2 text-sm font-medium shadow-md hover:opacity-95 focus:outline-none focus:ring-2 focus:ring-indigo-400 transition'>
            Search
        </button>
    </div>
    <p class='mt-3 text-xs text-gray-500 dark:text-gray-400'>
        Try &quot;Pikachu&quot;, &quot;White Dragon&quot; or &quot;Traveling Chocobo&quot;. Press Esc to clear.
    </p>
</form>"#,
        escape_html(query.text()),
        options,
        escape_html(&clear_href(query))
    )
}

/// Results grid, or the empty state when there is nothing to show
pub fn render_results(results: &[CardSummary]) -> String {
    if results.is_empty() {
        return render_empty_state();
    }

    let mut html =
        String::from("<div class='grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6'>");
    for card in results {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    html
}

fn render_empty_state() -> String {
    format!(
        r#"<div class='rounded-xl border border-dashed border-gray-200 dark:border-gray-800 bg-white/40 dark:bg-gray-900/40 p-8 text-center'>
    <svg class='mx-auto h-8 w-8 text-gray-400' viewBox='0 0 24 24' fill='none' aria-hidden='true'>
        <path d='M21 21l-4.35-4.35' stroke='currentColor' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
        <circle cx='11' cy='11' r='6' stroke='currentColor' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
    </svg>
    <h3 class='mt-4 text-sm font-semibold'>{}</h3>
    <p class='mt-2 text-xs text-gray-500 dark:text-gray-400'>Try a name, set, or keyword — results will appear here.</p>
</div>"#,
        EMPTY_STATE_TITLE
    )
}

/// Render a single card tile
pub fn render_card(card: &CardSummary) -> String {
    let sparkline = match &card.sparkline {
        Some(spark) => format!(
            r#"<div class='w-28 sm:w-32 max-w-full'>
                <svg viewBox='{}' class='w-full h-8 rounded-md' preserveAspectRatio='none' aria-hidden='true'>
                    <path d='{}' fill='none' stroke='{}' stroke-width='1.5' stroke-linecap='round' stroke-linejoin='round'/>
                </svg>
            </div>"#,
            spark.view_box(),
            spark.path,
            spark.stroke_color()
        ),
        None => "<div class='w-28 h-8 bg-gray-100 dark:bg-gray-800 rounded-md'></div>".to_string(),
    };

    let badges: String = card
        .changes
        .iter()
        .map(|badge| {
            format!(
                "<span class='inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {}' title='{}'>{}</span>",
                badge.class.css_class(),
                badge.title,
                escape_html(&badge.text)
            )
        })
        .collect();

    let marketplace_link = match &card.marketplace_url {
        Some(url) => format!(
            "<a class='ml-4 text-indigo-600 dark:text-indigo-400 hover:underline' href='{}' target='_blank' rel='noreferrer'>View on TCGplayer</a>",
            escape_html(url)
        ),
        None => String::new(),
    };

    let updated = card
        .updated
        .as_deref()
        .map(|at| format!("<p class='mt-2 text-[11px] text-gray-400'>Updated {}</p>", escape_html(at)))
        .unwrap_or_default();

    let game = if card.game.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        escape_html(&card.game)
    };

    format!(
        r#"<article class='flex flex-col justify-between rounded-2xl border border-gray-100 dark:border-gray-800 bg-white/70 dark:bg-gray-900/50 p-4 shadow-sm hover:shadow-md transition overflow-hidden'>
    <div>
        <div class='flex items-start justify-between gap-3'>
            <div class='min-w-0'>
                <h4 class='text-sm font-semibold leading-6 truncate'>{}</h4>
                <p class='mt-1 text-xs text-gray-500 dark:text-gray-400 truncate'>{}</p>
            </div>
            <div class='text-right'>
                <div class='text-sm font-medium text-gray-900 dark:text-gray-100'>{}</div>
                <div class='mt-1 text-xs text-gray-500 dark:text-gray-400'>{}</div>
            </div>
        </div>
        <div class='mt-3 flex items-center justify-between gap-3 flex-wrap'>
            <div class='flex items-center gap-2 min-w-0 flex-1'>{}</div>
            <div class='flex items-center gap-2 flex-shrink-0 mt-2 sm:mt-0'>{}</div>
        </div>
        {}
    </div>
    <div class='mt-4 flex items-center justify-between text-xs text-gray-500 dark:text-gray-400'>
        <div>Game: <span class='text-gray-700 dark:text-gray-200 ml-1'>{}</span></div>
        {}
    </div>
</article>"#,
        escape_html(&card.name),
        escape_html(&card.subtitle),
        escape_html(&card.price),
        escape_html(&card.variant_label),
        sparkline,
        badges,
        updated,
        game,
        marketplace_link
    )
}
