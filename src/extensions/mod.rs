pub mod labels;

pub use labels::{LabelLayoutConfig, TieredEvent, assign_label_tiers};
