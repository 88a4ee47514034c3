//! Guided number search: pick a region, then an area code, then search

use log::debug;
use thiserror::Error;

use super::catalog::RegionCatalog;

/// Country searched when none is given
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Numbers requested per search
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Where the user is in the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    ChoosingRegion {
        selected: Option<String>,
    },
    ChoosingAreaCode {
        region: String,
        selected: Option<String>,
    },
    Searching {
        region: String,
        area_code: String,
    },
}

impl WizardState {
    /// Short name used in logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::ChoosingRegion { .. } => "choosing region",
            WizardState::ChoosingAreaCode { .. } => "choosing area code",
            WizardState::Searching { .. } => "searching",
        }
    }

    /// One-based step number, for progress indicators
    pub fn step(&self) -> usize {
        match self {
            WizardState::ChoosingRegion { .. } => 1,
            WizardState::ChoosingAreaCode { .. } => 2,
            WizardState::Searching { .. } => 3,
        }
    }
}

/// Search issued when the user confirms an area code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub area_code: String,
    pub country_code: String,
    pub limit: u32,
}

/// Errors that can occur while driving the wizard
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    #[error("area code '{code}' is not in {region}")]
    UnknownAreaCode { region: String, code: String },

    #[error("please select {0} first")]
    NothingSelected(&'static str),

    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

/// The provisioning flow as an explicit state machine
///
/// Selections only move the flow forward through [`Wizard::proceed`], and
/// only once they have been validated against the catalog.
#[derive(Debug, Clone)]
pub struct Wizard {
    catalog: RegionCatalog,
    state: WizardState,
}

impl Wizard {
    pub fn new(catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            state: WizardState::ChoosingRegion { selected: None },
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Area codes offered in the current step, if it offers any
    pub fn offered_area_codes(&self) -> Option<&[String]> {
        match &self.state {
            WizardState::ChoosingAreaCode { region, .. } => self.catalog.area_codes(region),
            _ => None,
        }
    }

    /// Whether [`Wizard::proceed`] would currently succeed
    pub fn can_proceed(&self) -> bool {
        matches!(
            self.state,
            WizardState::ChoosingRegion { selected: Some(_) }
                | WizardState::ChoosingAreaCode {
                    selected: Some(_),
                    ..
                }
        )
    }

    pub fn select_region(&mut self, region: &str) -> Result<(), WizardError> {
        let WizardState::ChoosingRegion { selected } = &mut self.state else {
            return Err(self.invalid("select a region"));
        };
        if !self.catalog.contains_region(region) {
            return Err(WizardError::UnknownRegion(region.to_string()));
        }
        *selected = Some(region.to_string());
        Ok(())
    }

    pub fn clear_region(&mut self) -> Result<(), WizardError> {
        let WizardState::ChoosingRegion { selected } = &mut self.state else {
            return Err(self.invalid("clear the region"));
        };
        *selected = None;
        Ok(())
    }

    pub fn select_area_code(&mut self, code: &str) -> Result<(), WizardError> {
        let WizardState::ChoosingAreaCode { region, selected } = &mut self.state else {
            return Err(self.invalid("select an area code"));
        };
        if !self.catalog.has_area_code(region, code) {
            return Err(WizardError::UnknownAreaCode {
                region: region.clone(),
                code: code.to_string(),
            });
        }
        *selected = Some(code.to_string());
        Ok(())
    }

    pub fn clear_area_code(&mut self) -> Result<(), WizardError> {
        let WizardState::ChoosingAreaCode { selected, .. } = &mut self.state else {
            return Err(self.invalid("clear the area code"));
        };
        *selected = None;
        Ok(())
    }

    /// Advance to the next step
    ///
    /// Moving from area code selection to searching yields the search to
    /// run; moving from region to area code yields `None`.
    pub fn proceed(&mut self) -> Result<Option<SearchRequest>, WizardError> {
        let (next, request) = match &self.state {
            WizardState::ChoosingRegion { selected: None } => {
                return Err(WizardError::NothingSelected("a region"))
            }
            WizardState::ChoosingRegion {
                selected: Some(region),
            } => (
                WizardState::ChoosingAreaCode {
                    region: region.clone(),
                    selected: None,
                },
                None,
            ),
            WizardState::ChoosingAreaCode { selected: None, .. } => {
                return Err(WizardError::NothingSelected("an area code"))
            }
            WizardState::ChoosingAreaCode {
                region,
                selected: Some(code),
            } => (
                WizardState::Searching {
                    region: region.clone(),
                    area_code: code.clone(),
                },
                Some(SearchRequest {
                    area_code: code.clone(),
                    country_code: DEFAULT_COUNTRY_CODE.to_string(),
                    limit: DEFAULT_SEARCH_LIMIT,
                }),
            ),
            WizardState::Searching { .. } => return Err(self.invalid("proceed")),
        };

        debug!("wizard: {} -> {}", self.state.name(), next.name());
        self.state = next;
        Ok(request)
    }

    /// Start over from region selection, dropping both selections
    pub fn change_region(&mut self) {
        debug!("wizard: {} -> choosing region", self.state.name());
        self.state = WizardState::ChoosingRegion { selected: None };
    }

    fn invalid(&self, action: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(RegionCatalog::us_states())
    }
}
