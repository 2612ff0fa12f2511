//! # Engine Module
//!
//! The small stateful machines that sit between the pure catalog/lesson data
//! and the presentation layer.
//!
//! ## Architecture
//!
//! - **Quiz State** ([`quiz`]) - `QuizEngine<Q>`, one generic answer/submit/retake machine for every lesson
//! - **Navigation** ([`navigation`]) - The active-section index with per-lesson jump gating
//! - **Event Bus** ([`events`]) - Typed publish/subscribe channel between controls and views
//! - **Render Loop** ([`render_loop`]) - A scoped background frame driver that always stops on drop
//! - **Configuration** ([`config`]) - Explorer settings and their builder
//! - **Error Handling** ([`error`]) - Rejected transitions and loop failures
//!
//! Illegal transitions (submitting an incomplete quiz, jumping past a gate)
//! are rejected with an error and leave the state exactly as it was. Callers
//! that gate their controls can simply ignore these errors.

pub mod config;
pub mod error;
pub mod events;
pub mod navigation;
pub mod quiz;
pub mod render_loop;
