//! Prompt construction
//!
//! Fixed instruction template plus few-shot examples demonstrating the
//! single-command, multi-step, and no-command cases. The detected tool and
//! platform are embedded as generation hints.

use clio_core::ToolId;
use clio_foundation::PlatformFamily;
use clio_provider::Message;

/// Build the system instruction for a query
pub fn build_system_prompt(tool: Option<ToolId>, platform: PlatformFamily) -> String {
    let tool_name = tool.map(|t| t.as_str()).unwrap_or("unknown");

    format!(
        r#"You are an expert CLI assistant that generates precise, executable commands based on user requests.
For the query, respond ONLY with a JSON object containing:
- 'commands': an array of 1-5 command objects, each containing:
  - 'command': the exact command to run
  - 'description': a brief explanation of what the command does
  - 'safety_level': one of ['safe', 'low_risk', 'moderate_risk', 'dangerous']
  - 'confirm_required': true or false (whether user should confirm before execution)

Only generate multiple commands (up to 5 maximum) if the task requires sequential steps.
If the task can be done with one command, return just one command object in the array.

The detected tool is {tool_name} and the platform is {platform_name}.

Safety guidelines:
- 'dangerous': Commands that could lose data or harm the system (rm -rf, chmod 777)
- 'moderate_risk': Commands that modify state but are generally recoverable (git push, docker stop)
- 'low_risk': Commands that make minor changes (git commit, mkdir)
- 'safe': Commands that only read or display information (ls, git status)

Commands that delete, overwrite, or significantly modify data should be 'moderate_risk' or 'dangerous' and require confirmation.

Use idiomatic commands for the detected tool and platform. For Windows, use appropriate commands (dir instead of ls, etc.).

IMPORTANT: Output ONLY valid JSON without any other text, explanation, or markdown formatting.
Do not generate commands for general conversation or non-command queries.
"#,
        tool_name = tool_name,
        platform_name = platform.name(),
    )
}

/// Few-shot exchanges: one command, multi-step, and no command
pub fn few_shot_examples() -> Vec<Message> {
    vec![
        Message::user("push my code"),
        Message::assistant(
            r#"{"commands": [{"command": "git push origin main", "description": "Pushes committed code changes to the main branch on the remote repository", "safety_level": "moderate_risk", "confirm_required": true}]}"#,
        ),
        Message::user("create a new folder called project and initialize a git repo inside it"),
        Message::assistant(
            r#"{"commands": [{"command": "mkdir project", "description": "Creates a new directory named project", "safety_level": "low_risk", "confirm_required": false}, {"command": "cd project", "description": "Changes directory to the newly created project folder", "safety_level": "safe", "confirm_required": false}, {"command": "git init", "description": "Initializes a new Git repository", "safety_level": "low_risk", "confirm_required": false}]}"#,
        ),
        Message::user("how are you doing today?"),
        Message::assistant(r#"{"error": "No Command Found", "commands": []}"#),
    ]
}

/// Full message sequence for one generation request
pub fn build_messages(
    query: &str,
    tool: Option<ToolId>,
    platform: PlatformFamily,
) -> Vec<Message> {
    let mut messages = vec![Message::system(build_system_prompt(tool, platform))];
    messages.extend(few_shot_examples());
    messages.push(Message::user(query));
    messages
}
