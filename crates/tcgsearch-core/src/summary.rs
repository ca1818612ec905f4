//! Display-ready view of a single card
//!
//! Shared by the HTML results grid and the JSON search endpoint.

use crate::format::{format_change, format_currency, ChangeClass, PLACEHOLDER};
use crate::models::{Card, Variant};
use crate::select::select_cheapest;
use crate::sparkline::{Sparkline, SparklineSize};
use serde::Serialize;

const TCGPLAYER_PRODUCT_URL: &str = "https://www.tcgplayer.com/product/";

/// One percentage-change badge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeBadge {
    /// Short label, e.g. `24h`
    pub label: &'static str,
    /// Tooltip, e.g. `24 hour change`
    pub title: &'static str,
    pub text: String,
    pub class: ChangeClass,
}

impl ChangeBadge {
    fn new(label: &'static str, title: &'static str, value: Option<f64>) -> Self {
        Self {
            label,
            title,
            text: format_change(value),
            class: ChangeClass::classify(value),
        }
    }
}

/// A card shaped for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub game: String,
    /// `set • number • rarity`, empty parts skipped
    pub subtitle: String,
    /// Price of the cheapest variant, or the placeholder
    pub price: String,
    /// `printing • language` of the cheapest variant, or the placeholder
    pub variant_label: String,
    pub condition: Option<String>,
    pub sparkline: Option<Sparkline>,
    /// 24h, 7d and 30d changes, in that order
    pub changes: Vec<ChangeBadge>,
    pub marketplace_url: Option<String>,
    /// Last price update, `YYYY-MM-DD HH:MM UTC`
    pub updated: Option<String>,
}

impl CardSummary {
    pub fn from_card(card: &Card) -> Self {
        Self::with_size(card, SparklineSize::default())
    }

    pub fn with_size(card: &Card, size: SparklineSize) -> Self {
        let best = select_cheapest(&card.variants);

        let subtitle = [&card.set, &card.number, &card.rarity]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" • ");

        let tcgplayer_id = card.tcgplayer_id.trim();
        let marketplace_url = (!tcgplayer_id.is_empty())
            .then(|| format!("{}{}", TCGPLAYER_PRODUCT_URL, tcgplayer_id));

        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            game: card.game.clone(),
            subtitle,
            price: format_currency(best.and_then(|v| v.price)),
            variant_label: best.map_or_else(|| PLACEHOLDER.to_string(), variant_label),
            condition: best
                .map(|v| v.condition.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            sparkline: best.and_then(|v| Sparkline::from_history(&v.price_history, size)),
            changes: vec![
                ChangeBadge::new("24h", "24 hour change", best.and_then(|v| v.price_change_24hr)),
                ChangeBadge::new("7d", "7 day change", best.and_then(|v| v.price_change_7d)),
                ChangeBadge::new("30d", "30 day change", best.and_then(|v| v.price_change_30d)),
            ],
            marketplace_url,
            updated: best
                .and_then(Variant::last_updated_at)
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string()),
        }
    }
}

fn variant_label(variant: &Variant) -> String {
    let parts: Vec<&str> = [variant.printing.trim(), variant.language.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(" • ")
    }
}
