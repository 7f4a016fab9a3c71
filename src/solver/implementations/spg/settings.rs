use crate::solver::core::{traits::Settings, SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for the [`SpgSolver`](crate::solver::SpgSolver).
///
/// Construct with [`SpgSettingsBuilder`], which checks every field before
/// returning, or start from `SpgSettings::default()` and modify fields
/// directly.  Settings are checked again when the solver is created.
///
/// ```
/// use spgopt::solver::*;
///
/// let settings = SpgSettingsBuilder::default()
///     .mem(10)
///     .eps1(0.0)
///     .maxit(500)
///     .build()
///     .unwrap();
/// assert_eq!(settings.eps2, 1e-6);
///
/// assert!(SpgSettingsBuilder::default().eta(0.0).build().is_err());
/// ```

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpgSettings {
    ///length of the nonmonotone window.  1 gives a monotone line search
    #[builder(default = "1")]
    pub mem: usize,

    ///infinity norm tolerance on the projected gradient
    #[builder(default = "1e-6")]
    pub eps1: f64,

    ///Euclidean norm tolerance on the projected gradient
    #[builder(default = "1e-6")]
    pub eps2: f64,

    ///relative change tolerance on the objective.  0 disables the test
    #[builder(default = "0.0")]
    pub eps3: f64,

    ///gradient scaling in the projected gradient `(x - P(x - eta*g))/eta`
    #[builder(default = "1.0")]
    pub eta: f64,

    ///maximum number of iterations
    #[builder(default = "u32::MAX")]
    pub maxit: u32,

    ///maximum number of objective/gradient evaluations, including the
    ///evaluation at the starting point.  Must be at least 1
    #[builder(default = "u32::MAX")]
    pub maxfc: u32,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for SpgSettings {
    fn default() -> SpgSettings {
        SpgSettingsBuilder::default().build().unwrap()
    }
}

impl Settings for SpgSettings {
    /// Checks that all numerical fields are in range
    fn validate(&self) -> Result<(), SettingsError> {
        validate_mem(self.mem)?;
        validate_tolerance("eps1", self.eps1)?;
        validate_tolerance("eps2", self.eps2)?;
        validate_tolerance("eps3", self.eps3)?;
        validate_eta(self.eta)?;
        validate_maxfc(self.maxfc)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SpgSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SpgSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl SpgSettingsBuilder {
    /// check the fields that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(mem) = self.mem {
            validate_mem(mem)?;
        }
        if let Some(eps1) = self.eps1 {
            validate_tolerance("eps1", eps1)?;
        }
        if let Some(eps2) = self.eps2 {
            validate_tolerance("eps2", eps2)?;
        }
        if let Some(eps3) = self.eps3 {
            validate_tolerance("eps3", eps3)?;
        }
        if let Some(eta) = self.eta {
            validate_eta(eta)?;
        }
        if let Some(maxfc) = self.maxfc {
            validate_maxfc(maxfc)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_mem(mem: usize) -> Result<(), SettingsError> {
    if mem >= 1 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("mem"))
    }
}

// NB: written so that NaN fails
fn validate_tolerance(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(name))
    }
}

// the starting point is always evaluated
fn validate_maxfc(maxfc: u32) -> Result<(), SettingsError> {
    if maxfc >= 1 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("maxfc"))
    }
}

fn validate_eta(eta: f64) -> Result<(), SettingsError> {
    if eta > 0.0 && eta.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("eta"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = SpgSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, SpgSettings::default());
    assert_eq!(settings.mem, 1);
    assert_eq!(settings.eta, 1.0);

    // fail on bad values through the builder
    assert!(SpgSettingsBuilder::default().mem(0).build().is_err());
    assert!(SpgSettingsBuilder::default().eps1(-1e-3).build().is_err());
    assert!(SpgSettingsBuilder::default().eps2(f64::NAN).build().is_err());
    assert!(SpgSettingsBuilder::default().eps3(-1.0).build().is_err());
    assert!(SpgSettingsBuilder::default().eta(-2.0).build().is_err());
    assert!(SpgSettingsBuilder::default().eta(f64::INFINITY).build().is_err());
    assert!(SpgSettingsBuilder::default().maxfc(0).build().is_err());
    assert!(SpgSettingsBuilder::default().maxfc(1).build().is_ok());

    // zero tolerances are allowed
    assert!(SpgSettingsBuilder::default()
        .eps1(0.0)
        .eps2(0.0)
        .build()
        .is_ok());

    // directly construct a bad SpgSettings and manually check
    let settings = SpgSettings {
        mem: 0,
        ..SpgSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("mem"))
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_serde() {
    let settings = SpgSettings {
        mem: 7,
        eps3: 1e-12,
        ..SpgSettings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let settings2: SpgSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, settings2);

    // missing fields take defaults
    let partial: SpgSettings = serde_json::from_str(r#"{"mem": 4}"#).unwrap();
    assert_eq!(partial.mem, 4);
    assert_eq!(partial.eps1, SpgSettings::default().eps1);
}
