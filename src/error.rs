use cards::{ApiError, ItemId};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("card `{0}` not found")]
    CardNotFound(String),
    #[error("{kind} {id} not found on card `{card}`")]
    ItemNotFound { card: String, kind: &'static str, id: ItemId },
    #[error("drawing {0} has no saved scene")]
    NoScene(ItemId),
    #[error("nothing to update; pass at least one field")]
    EmptyPatch,
    #[error("recipient name must not be blank")]
    BlankRecipient,
    #[error("message content must not be blank")]
    BlankMessage,
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
