use std::io::{BufRead, Write};

use serde::Serialize;

use super::QueryCommand;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId, Reachability};

pub const DEFAULT_PROMPT: &str = "Enter origin and destination (quit to exit): ";

/// Counters for one interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub queries: usize,
    pub paths_found: usize,
    pub unknown_nodes: usize,
    pub usage_errors: usize,
}

/// Prompt/answer loop over a read-only graph.
pub struct Session<'g> {
    graph: &'g Graph,
    engine: Reachability,
    prompt: String,
    show_path: bool,
}

impl<'g> Session<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            engine: Reachability::new(),
            prompt: DEFAULT_PROMPT.to_string(),
            show_path: false,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Look up both endpoints by name.
    pub fn resolve(&self, src: &str, dest: &str) -> Result<(NodeId, NodeId)> {
        let find = |name: &str| {
            self.graph
                .find_node(name)
                .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
        };
        Ok((find(src)?, find(dest)?))
    }

    /// Run until `quit` or end of input.
    ///
    /// Unknown names and malformed lines are answered and the loop continues;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("End of input, leaving session");
                writeln!(output)?;
                writeln!(output, "Normal exit.")?;
                break;
            }

            // Undecodable bytes become U+FFFD and end up as unknown names
            let line = String::from_utf8_lossy(&buf);
            match QueryCommand::parse(&line) {
                QueryCommand::Quit => {
                    writeln!(output, "Normal exit.")?;
                    break;
                }
                QueryCommand::Usage => {
                    summary.usage_errors += 1;
                    writeln!(output, "Please enter two destinations\n")?;
                }
                QueryCommand::Pair { src, dest } => match self.resolve(&src, &dest) {
                    Err(e) => {
                        log::debug!("{}", e);
                        summary.unknown_nodes += 1;
                        writeln!(output, "Destinations do not exist, please try again.\n")?;
                    }
                    Ok((src_id, dest_id)) => {
                        summary.queries += 1;
                        if self.engine.find_path(self.graph, src_id, dest_id) {
                            summary.paths_found += 1;
                            writeln!(output, "There is a path from {} to {}.", src, dest)?;
                            if self.show_path {
                                if let Some(route) = self.engine.trace_path(self.graph, src_id, dest_id) {
                                    writeln!(output, "{}", self.format_route(&route))?;
                                }
                            }
                            writeln!(output)?;
                        } else {
                            writeln!(output, "There is no path from {} to {}.\n", src, dest)?;
                        }
                    }
                },
            }
        }

        log::info!(
            "Session ended: {} queries, {} paths found, {} unknown-node errors, {} usage errors",
            summary.queries,
            summary.paths_found,
            summary.unknown_nodes,
            summary.usage_errors
        );
        Ok(summary)
    }

    fn format_route(&self, route: &[NodeId]) -> String {
        route
            .iter()
            .map(|&id| self.graph.name(id))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}
