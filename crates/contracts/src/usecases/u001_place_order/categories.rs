use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::a003_sale_offer::aggregate::OfertaVenta;

/// Display group of offers sharing an article. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub is_open: bool,
}

impl Category {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

/// One closed category per distinct `idarticulo`, in order of first
/// appearance. The name comes from the first offer seen for the article.
pub fn build_categories(ofertas: &[OfertaVenta]) -> Vec<Category> {
    let mut seen = HashSet::new();
    ofertas
        .iter()
        .filter(|o| seen.insert(o.idarticulo))
        .map(|o| Category {
            id: o.idarticulo,
            name: o.articulo.clone(),
            is_open: false,
        })
        .collect()
}
