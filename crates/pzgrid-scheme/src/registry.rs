use crate::{
    DecodeError, DecodeInput, DecodedPuzzle,
    scheme::{self, BoxedScheme, Scheme},
};

/// A lookup table from puzzle type name to decoder.
///
/// Names are matched exactly and case-sensitively. An unknown name is an
/// error, never a fallback to some default scheme.
///
/// # Examples
///
/// ```
/// use pzgrid_scheme::{DecodeInput, SchemeRegistry};
///
/// let registry = SchemeRegistry::with_all_schemes();
/// let decoded = registry.decode("shikaku", &DecodeInput::new(1, 3, "a5"))?;
/// assert_eq!(decoded.problem_text().to_string(), "1 3\n- 5 -");
///
/// assert!(registry.get("Shikaku").is_err());
/// # Ok::<(), pzgrid_scheme::DecodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    schemes: Vec<BoxedScheme>,
}

impl SchemeRegistry {
    /// Creates a registry holding the given schemes.
    ///
    /// When two schemes share a name, the first one wins.
    #[must_use]
    pub fn new(schemes: Vec<BoxedScheme>) -> Self {
        Self { schemes }
    }

    /// Creates a registry holding every built-in scheme.
    #[must_use]
    pub fn with_all_schemes() -> Self {
        Self::new(scheme::all_schemes())
    }

    /// Returns the registered schemes in registration order.
    #[must_use]
    pub fn schemes(&self) -> &[BoxedScheme] {
        &self.schemes
    }

    /// Returns the registered puzzle type names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemes.iter().map(|scheme| scheme.name())
    }

    /// Looks up the scheme registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPuzzleType`] if no scheme has that name.
    pub fn get(&self, name: &str) -> Result<&dyn Scheme, DecodeError> {
        self.schemes
            .iter()
            .find(|scheme| scheme.name() == name)
            .map(AsRef::as_ref)
            .ok_or_else(|| DecodeError::UnknownPuzzleType {
                name: name.to_owned(),
            })
    }

    /// Decodes `input` with the scheme registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownPuzzleType`] for an unknown name, or the
    /// scheme's own error unchanged.
    pub fn decode(&self, name: &str, input: &DecodeInput<'_>) -> Result<DecodedPuzzle, DecodeError> {
        self.get(name)?.decode(input)
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::with_all_schemes()
    }
}
