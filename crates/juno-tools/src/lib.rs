mod builtin;
mod exec;
mod policy;
mod registry;
mod tool;

pub use builtin::boundary::SuggestBoundaryTestsTool;
pub use builtin::coverage::SummarizeCoverageTool;
pub use builtin::git::{GitAddAllTool, GitCommitTool, GitPushTool, GitStatusTool};
pub use builtin::maven::RunMavenTestsTool;
pub use builtin::suggest::SuggestJunitTestsTool;
pub use exec::{run_command, CommandOutcome, CommandRequest, ExecError};
pub use policy::ApprovalPolicy;
pub use registry::{ToolRegistry, ToolSchema};
pub use tool::{Tool, ToolCall, ToolOutput};
