//! Startup Analysis Workflow
//!
//! A single analysis run, from submission to rendered report:
//!
//! ```text
//! submit(idea)
//!      │
//!      ▼
//! ┌──────────────┐   user + loading messages
//! │  Controller  │ ─────────────────────────────► Message Log
//! └──────────────┘
//!      │ start                       ▲ label updates (one per stage)
//!      ▼                             │
//! ┌──────────────┐  StageChanged / TimerDone    │
//! │   Progress   │ ─────────── events ──────────┘
//! │  Simulator   │
//! └──────────────┘
//!      │ deadline (100th tick)
//!      ▼
//! ┌──────────────┐
//! │   Renderer   │  → agent message with the report tree
//! └──────────────┘
//! ```
//!
//! Timer callbacks never touch the log; they post run-tagged events that the
//! controller applies from its owning task.

pub mod controller;
pub mod message;
pub mod progress;
pub mod render;
pub mod stages;

pub use controller::{AnalysisWorkflow, RunId, SubmitOutcome};
pub use message::{Message, MessageContent, MessageId, MessageLog, MessageRole, MessageStatus};
pub use progress::{ProgressSimulator, ProgressState};
pub use render::{render, Block, Item, RenderedReport, Section, SectionKind, Tag, Tone};
pub use stages::{StageSequence, RESEARCH_STAGES};
