//! SiteDeck core: site registry, active-view state machine and view-model helpers.
//!
//! Nothing in here touches the disk or the clock. Callers feed [`Msg`]s into
//! [`update`] and execute the returned [`Effect`]s.
mod effect;
mod error;
mod msg;
mod registry;
mod site;
mod state;
mod update;
mod validate;
mod view;
mod view_model;

pub use effect::Effect;
pub use error::{Field, ValidationError};
pub use msg::Msg;
pub use registry::Registry;
pub use site::{default_sites, Site, SiteId, SiteStamp};
pub use state::AppState;
pub use update::update;
pub use validate::{normalize_site_url, validate_site_input, SiteDraft};
pub use view::{ViewState, ViewerFrame};
pub use view_model::{AppViewModel, SiteRowView};
