// Study plans: role + week count → fixed prompt → model text.

pub mod handlers;
pub mod planner;
pub mod prompts;
