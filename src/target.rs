//! Target architectures for generated code.

/// An architecture that the compiler can emit code for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Target {
    /// Portable C source, independent of any particular machine
    #[default]
    #[display("Generic C")]
    GenericC,
}
