//! Pure planning calculators: SIP growth and pocket-money schedules.

pub mod pocket;
pub mod sip;

pub use pocket::{pocket_plan, PocketPlan, MAX_POCKET_DAYS};
pub use sip::{
    annuity_due_value, project_sip, sip_future_value, sip_series, SipPoint, SipProjection,
    MAX_SIP_MONTHS,
};
