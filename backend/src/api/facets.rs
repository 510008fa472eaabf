//! Option lists of the search facets.

use common::facet::{FacetItem, FacetKind};

use crate::rest_utils::catalog_client::CatalogClient;

/// Options of `kind`. Dependent facets are narrowed to the selected `parent_ids`.
pub async fn list_facet_options(
    client: &CatalogClient,
    kind: FacetKind,
    parent_ids: &[u64],
) -> anyhow::Result<Vec<FacetItem>> {
    let query = match kind.parent().and_then(|parent| parent.id_query_param()) {
        Some(param) => parent_ids
            .iter()
            .map(|id| (param.to_string(), id.to_string()))
            .collect::<Vec<_>>(),
        None => Vec::new(),
    };
    client.get_json(kind.options_endpoint(), &query, None).await
}
