//! Frames exchanged with the orchestrator.
//!
//! Every frame is a JSON object tagged by `message_type`:
//!
//! | Direction | `message_type`     | Payload                                             |
//! |-----------|--------------------|-----------------------------------------------------|
//! | out       | `agent_register`   | `agent_name?`, `tools`                              |
//! | out       | `agent_response`   | `invocation_id`, `tool_name`, `response`            |
//! | in        | `agent_registered` | `agent_id`                                          |
//! | in        | `agent_invoke`     | `invocation_id`, `tool_name`, `arguments`, `metadata?` |
//! | in        | `agent_error`      | `message`                                           |

use babel_models::llm::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A frame sent by the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Announces the agent and its tools.
    AgentRegister {
        /// Human-readable agent name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        agent_name: Option<String>,
        /// Every tool the agent serves.
        tools: Vec<ToolDefinition>,
    },
    /// Result of one invocation.
    AgentResponse {
        /// Id copied from the matching `agent_invoke`.
        invocation_id: String,
        /// Name of the tool that ran.
        tool_name: String,
        /// The tool's JSON result.
        response: Value,
    },
}

/// A frame received from the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message_type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Registration was accepted.
    AgentRegistered {
        /// Id assigned to this agent.
        agent_id: String,
    },
    /// A request to run a tool.
    AgentInvoke {
        /// Correlates the response with this request.
        invocation_id: String,
        /// Tool to run.
        tool_name: String,
        /// Arguments object.
        #[serde(default)]
        arguments: Value,
        /// Opaque request metadata.
        #[serde(default)]
        metadata: Map<String, Value>,
    },
    /// The orchestrator reported a problem.
    AgentError {
        /// Error description.
        message: String,
    },
}

impl OutboundMessage {
    /// Serializes the frame to JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl InboundMessage {
    /// Parses a JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or an unknown `message_type`.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
