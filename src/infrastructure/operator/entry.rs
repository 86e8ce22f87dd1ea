//! Concrete operator backing every inbound operator port.

/// Stateless operator. Each call parses the configuration it is handed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
