//! Request flows that combine the classifier with host-provided services.

pub mod ai_triage;
