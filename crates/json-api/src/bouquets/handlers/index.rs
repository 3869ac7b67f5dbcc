//! Bouquet Line Index Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::bouquets::models::BouquetLine;

use crate::{bouquets::errors::into_status_error, extensions::DepotExt as _, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BouquetLineResponse {
    /// The unique identifier of the line
    pub uuid: Uuid,

    /// The bouquet product this line belongs to
    pub bouquet_uuid: Uuid,

    /// The flower on this line
    pub flower_uuid: Uuid,

    /// Number of stems
    pub quantity: u32,

    /// The flower's price when the line was added, in pence/cents
    pub unit_price: u64,

    /// The date and time the line was created
    pub created_at: String,

    /// The date and time the line was last updated
    pub updated_at: String,
}

impl From<BouquetLine> for BouquetLineResponse {
    fn from(line: BouquetLine) -> Self {
        Self {
            uuid: line.uuid.into(),
            bouquet_uuid: line.bouquet_uuid.into(),
            flower_uuid: line.flower_uuid.into(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            created_at: line.created_at.to_string(),
            updated_at: line.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BouquetLinesResponse {
    /// The composition lines of the bouquet
    pub lines: Vec<BouquetLineResponse>,
}

/// Bouquet Line Index Handler
///
/// Returns the composition lines of a bouquet product.
#[endpoint(tags("bouquet-flowers"), summary = "List Bouquet Lines")]
pub(crate) async fn handler(
    bouquet: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BouquetLinesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let lines = state
        .app
        .bouquets
        .list_lines(bouquet.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(BouquetLinesResponse {
        lines: lines.into_iter().map(Into::into).collect(),
    }))
}
