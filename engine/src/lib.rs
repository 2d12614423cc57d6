pub mod catalog;
pub mod index;
pub mod recommend;
pub mod similarity;
pub mod tokenizer;

pub use catalog::{Catalog, MovieRecord};
pub use index::{DocVector, FeatureIndex, TermId};
pub use recommend::{recommend, Recommendation, RecommendError};
pub use similarity::cosine;
