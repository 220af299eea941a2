//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod contact;
pub mod diagrams;
pub mod layout;
pub mod scenes;
pub mod social;

pub use contact::ContactForm;
pub use diagrams::{BenchmarkDiagram, PipelineDiagram, ProjectionDiagram};
pub use layout::DashboardLayout;
pub use scenes::{HeroScene, MatrixStackScene};
pub use social::SocialButton;
