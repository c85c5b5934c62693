pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod queue;
pub mod viewport;
pub mod widget;

pub use config::{AccordionConfig, ClassNames};
pub use dom::{Dom, MemoryDom};
pub use error::AccordionError;
pub use event::{Key, Modifiers};
pub use queue::{AccordionEvent, Command, EventQueue};
pub use viewport::{FixedViewport, Viewport, ViewportProbe};
pub use widget::{Accordion, AccordionBuilder, AccordionState, Item};
