use thiserror::Error;

/// Shown when the collection could not be loaded
pub const MSG_FETCH_FAILED: &str = "Não foi possível carregar a lista de produtos.";
/// Shown when a required form field is empty
pub const MSG_MISSING_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios.";
/// Shown when the price input is not a number
pub const MSG_INVALID_PRICE: &str = "Preço inválido. Use apenas números e ponto ou vírgula.";
/// Shown when the quantity input is not a whole number
pub const MSG_INVALID_QUANTITY: &str = "Quantidade inválida.";
/// Shown when create/update was rejected
pub const MSG_SAVE_FAILED: &str = "Erro ao salvar o produto. Tente novamente.";
/// Shown when delete was rejected
pub const MSG_DELETE_FAILED: &str = "Não foi possível excluir o produto.";

/// Failures of the product manager operations.
///
/// All of them are handled where they happen: logged, then shown to the
/// user. The view stays usable with its last known state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("failed to load products: {0}")]
    Fetch(String),

    /// Carries the notice shown to the user
    #[error("invalid product form: {0}")]
    Validation(&'static str),

    #[error("failed to save product: {0}")]
    Save(String),

    #[error("failed to delete product: {0}")]
    Delete(String),
}

impl ProductError {
    /// Blocking notice text for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Fetch(_) => MSG_FETCH_FAILED,
            Self::Validation(msg) => *msg,
            Self::Save(_) => MSG_SAVE_FAILED,
            Self::Delete(_) => MSG_DELETE_FAILED,
        }
    }
}
