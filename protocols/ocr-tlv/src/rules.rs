//! Cross-parameter rules: mandatory and dependent parameters

use alloc::vec::Vec;

use crate::catalog::{Catalog, OCR_CATALOG};
use crate::error::TlvError;
use crate::parameter::{ParameterType, TlvParameter};

/// Validate a full parameter set against the built-in catalog.
pub fn validate_parameters(params: &[TlvParameter]) -> (bool, Vec<TlvError>) {
    OCR_CATALOG.validate_parameters(params)
}

impl Catalog {
    /// Run the entry validator over every parameter, then the presence
    /// rules. Each failing parameter contributes exactly one error.
    pub fn validate_parameters(&self, params: &[TlvParameter]) -> (bool, Vec<TlvError>) {
        let mut errors: Vec<TlvError> = params
            .iter()
            .filter_map(|param| {
                self.validate_entry(param.parameter_type, param.length, &param.value)
                    .err()
            })
            .collect();
        errors.extend(self.check_presence(params));
        (errors.is_empty(), errors)
    }

    /// Mandatory and dependency checks only.
    ///
    /// Reports one `MissingMandatoryParameter` per absent mandatory type and
    /// one `MissingDependentParameter` per distinct type whose dependency is
    /// absent, however often that type repeats.
    pub fn check_presence(&self, params: &[TlvParameter]) -> Vec<TlvError> {
        let present = |code: u8| params.iter().any(|param| param.parameter_type.code() == code);
        let mut errors = Vec::new();

        for entry in self.mandatory_entries() {
            if !present(entry.code) {
                errors.push(TlvError::MissingMandatoryParameter(entry.parameter_type()));
            }
        }

        let mut reported: Vec<u8> = Vec::new();
        for param in params {
            let code = param.parameter_type.code();
            let Some(depends_on) = self.lookup(code).and_then(|entry| entry.depends_on) else {
                continue;
            };
            if !present(depends_on) && !reported.contains(&code) {
                reported.push(code);
                errors.push(TlvError::MissingDependentParameter {
                    parameter_type: param.parameter_type,
                    depends_on: ParameterType::from(depends_on),
                });
            }
        }

        errors
    }
}
