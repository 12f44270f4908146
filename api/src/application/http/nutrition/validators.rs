use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// At least two characters; shorter terms return nothing.
    #[serde(default)]
    #[param(example = "app")]
    pub q: String,
}
