//! Active-stage state: collections, drafts, metrics and the tab selector
//!
//! A `Dashboard` only exists once the gate reaches `Active`, which is what makes
//! tab selection unreachable from the sign-in and location screens.

use super::aqi::Aqi;
use super::collection::Collection;
use super::drafts::{AlertDraft, MessageDraft, ProductDraft};
use super::gate::Tab;
use super::map::MapView;
use super::models::{
    Alert, LatLon, Message, NewAlert, NewMessage, NewProduct, NewsItem, Product,
};
use super::settings::{SEED_ALERTS, SEED_MESSAGES, SEED_NEWS, SEED_PRODUCTS};
use super::simulation::{self, RandomSource};

#[derive(Debug, Clone)]
pub struct Dashboard {
    tab: Tab,
    map_center: LatLon,
    map_zoom: u8,
    alerts: Collection<Alert>,
    products: Collection<Product>,
    messages: Collection<Message>,
    news: Collection<NewsItem>,
    aqi: Aqi,
    suggestion: String,

    pub alert_draft: AlertDraft,
    pub product_draft: ProductDraft,
    pub message_draft: MessageDraft,
    /// Free-text news filter on the Home tab
    pub news_search: String,
}

impl Dashboard {
    /// Fresh dashboard with the seed collections; generators have not run yet
    pub fn new(map_center: LatLon, map_zoom: u8, initial_aqi: u32) -> Self {
        Self {
            tab: Tab::default(),
            map_center,
            map_zoom,
            alerts: Collection::seeded(SEED_ALERTS, |id, (kind, location, severity)| Alert {
                id,
                kind: kind.to_string(),
                location: location.to_string(),
                severity,
            }),
            products: Collection::seeded(SEED_PRODUCTS, |id, (name, price, seller)| Product {
                id,
                name: name.to_string(),
                price,
                seller: seller.to_string(),
            }),
            messages: Collection::seeded(SEED_MESSAGES, |id, (user, content, timestamp)| {
                Message {
                    id,
                    user: user.to_string(),
                    content: content.to_string(),
                    timestamp: timestamp.to_string(),
                }
            }),
            news: Collection::seeded(SEED_NEWS, |id, (title, content, date)| NewsItem {
                id,
                title: title.to_string(),
                content: content.to_string(),
                date: date.to_string(),
            }),
            aqi: Aqi::new(initial_aqi),
            suggestion: String::new(),
            alert_draft: AlertDraft::default(),
            product_draft: ProductDraft::default(),
            message_draft: MessageDraft::default(),
            news_search: String::new(),
        }
    }

    /// Same as [`Dashboard::new`] but with every collection empty
    #[cfg(test)]
    pub fn empty(map_center: LatLon, map_zoom: u8, initial_aqi: u32) -> Self {
        Self {
            alerts: Collection::new(),
            products: Collection::new(),
            messages: Collection::new(),
            news: Collection::new(),
            ..Self::new(map_center, map_zoom, initial_aqi)
        }
    }

    // ─── Tabs ────────────────────────────────────────────────

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns whether the selection changed
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        let changed = self.tab != tab;
        self.tab = tab;
        changed
    }

    // ─── Collections ─────────────────────────────────────────

    pub fn alerts(&self) -> &Collection<Alert> {
        &self.alerts
    }

    pub fn products(&self) -> &Collection<Product> {
        &self.products
    }

    pub fn messages(&self) -> &Collection<Message> {
        &self.messages
    }

    /// Append an alert and reset the alert form
    pub fn add_alert(&mut self, new: NewAlert) -> &Alert {
        self.alert_draft = AlertDraft::default();
        self.alerts.insert_with(|id| Alert {
            id,
            kind: new.kind,
            location: new.location,
            severity: new.severity,
        })
    }

    /// Append a listing and reset the product form
    ///
    /// No role check happens here; the caller decides who may sell.
    pub fn add_product(&mut self, new: NewProduct) -> &Product {
        self.product_draft = ProductDraft::default();
        self.products.insert_with(|id| Product {
            id,
            name: new.name,
            price: new.price,
            seller: new.seller,
        })
    }

    /// Append a message and reset the compose box
    pub fn add_message(&mut self, new: NewMessage) -> &Message {
        self.message_draft = MessageDraft::default();
        self.messages.insert_with(|id| Message {
            id,
            user: new.user,
            content: new.content,
            timestamp: new.timestamp,
        })
    }

    /// News whose title contains `term`, ignoring case
    ///
    /// Lazily filters the full collection on every call; nothing is indexed.
    pub fn search_news(&self, term: &str) -> impl Iterator<Item = &NewsItem> + '_ {
        let needle = term.to_lowercase();
        self.news
            .iter()
            .filter(move |item| item.title.to_lowercase().contains(&needle))
    }

    /// News filtered by the current search field
    pub fn visible_news(&self) -> impl Iterator<Item = &NewsItem> + '_ {
        self.search_news(&self.news_search)
    }

    // ─── Metrics ─────────────────────────────────────────────

    pub fn aqi(&self) -> Aqi {
        self.aqi
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Replace the current suggestion with a freshly drawn one
    pub fn generate_reforestation_suggestion(&mut self, random: &mut dyn RandomSource) -> &str {
        self.suggestion = simulation::reforestation_suggestion(random);
        &self.suggestion
    }

    /// Lower the AQI by a random improvement; returns the amount applied
    ///
    /// Once the index is at 0 this leaves it there.
    pub fn simulate_reforestation_impact(&mut self, random: &mut dyn RandomSource) -> u32 {
        let improvement = simulation::aqi_improvement(random);
        self.aqi.improve(improvement)
    }

    // ─── Map ─────────────────────────────────────────────────

    pub fn map_view(&self) -> MapView {
        MapView::new(self.map_center, self.map_zoom, &self.alerts)
    }
}
