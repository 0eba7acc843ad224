// Roast service: validation, versioned prompt composition, and the
// POST /api/roast handler. All provider calls go through `provider` —
// no direct API calls here.

pub mod composer;
pub mod handlers;
pub mod prompts;
