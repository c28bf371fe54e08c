use serde::Serialize;
use thiserror::Error;

/// Terminal failure for one image. None of these are fatal to the process;
/// callers treat any of them as "no grid in this frame".
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GridError {
    #[error("no grid cell candidates survived validation and filtering")]
    NoCandidates,
    #[error("grid topology unresolved: {matched} boxes matched after {anchors_tried} anchors")]
    #[serde(rename_all = "camelCase")]
    TopologyUnresolved { matched: usize, anchors_tried: usize },
    #[error("least-squares normal matrix is singular")]
    SingularFit,
}
