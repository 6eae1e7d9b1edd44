use axum::Json;
use serde::Serialize;

use crate::models::design::{BACKGROUND_PRESETS, BRAND_COLORS, FONT_FAMILIES};
use crate::targeting::catalog::{catalog, ProfileCatalog};

/// Everything a client needs to populate its pickers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub profiles: Vec<ProfileCatalog>,
    pub brand_colors: &'static [&'static str],
    pub background_presets: &'static [&'static str],
    pub font_families: &'static [&'static str],
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        profiles: catalog(),
        brand_colors: &BRAND_COLORS,
        background_presets: &BACKGROUND_PRESETS,
        font_families: &FONT_FAMILIES,
    })
}
