use wander_catalog::{PackageCategory, TripPackage};
use wander_core::view::{CardModel, DetailModel, View};

use crate::state::AppState;

fn render_cards(view: &dyn View, packages: &[&TripPackage]) {
    let cards: Vec<CardModel> = packages.iter().map(|package| CardModel::from(*package)).collect();
    view.render_list(&cards);
}

pub fn show_catalog(state: &AppState, view: &dyn View) {
    let all: Vec<&TripPackage> = state.catalog.packages().iter().collect();
    render_cards(view, &all);
}

pub fn show_category(state: &AppState, view: &dyn View, category: PackageCategory) {
    render_cards(view, &state.catalog.by_category(category));
}

pub fn search_catalog(state: &AppState, view: &dyn View, term: &str) {
    render_cards(view, &state.catalog.search(term));
}

pub fn show_package(state: &AppState, view: &dyn View, package_id: u32) {
    match state.catalog.find(package_id) {
        Ok(package) => view.render_detail(&DetailModel::from(package)),
        Err(e) => view.render_error("catalog", &e.to_string()),
    }
}
