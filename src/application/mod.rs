// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (running the scripted demo or answering a
// one-off question).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No argument parsing here (that's Layer 1)
//   - Only workflow coordination around the session
//
// The session itself lives here: it is the one component with
// local state (the current context) and local logic (the
// confidence threshold policy). Everything else delegates.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The QA session: context holder + threshold policy
pub mod session;

// The scripted four-turn conversation demo
pub mod demo_use_case;

// One-off question answering over a context file
pub mod ask_use_case;
