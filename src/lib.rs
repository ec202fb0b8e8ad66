pub mod analysis;
pub mod api;
pub mod context;
pub mod detect;
pub mod enhancer;
pub mod logging;
pub mod process;
pub mod rule;
pub mod stage;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing {
    pub mod stage_contract;
}

pub use analysis::{Readability, score, suggest};
pub use api::{EnhanceRequest, EnhanceResponse, RequestError, handle};
pub use context::{Context, EnhancementOptions, Tone};
pub use detect::detect;
pub use enhancer::{EnhancementResult, Enhancer, apply};
pub use stage::Stage;
