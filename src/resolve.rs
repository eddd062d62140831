//! Precedence resolution across sources.
//!
//! Records arrive ordered by directory path length (see
//! [`aggregate`](crate::discovery::aggregate::aggregate)). For every server
//! name declared by two or more records, the declaration from the record
//! that comes last, i.e. the longest directory path, is active and all others
//! are overridden.
//!
//! The comparison is purely textual: it does not check whether one directory
//! is an ancestor of another or of the working directory.
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{ConfigSource, DiscoveryRecord, FormatKind, ServerDeclaration};

/// Outcome for one declaration within a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// The declaration that takes effect.
    Active,
    /// Shadowed by a declaration from a longer path.
    Overridden,
}

/// One declaration participating in a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConflictInstance<'a> {
    /// Where the declaration lives.
    pub source: &'a ConfigSource,
    /// The declaration itself.
    pub server: &'a ServerDeclaration,
    /// Whether it wins.
    pub status: Resolution,
}

/// All declarations of one server name, in precedence order (winner last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictGroup<'a> {
    /// The shared server name.
    pub name: &'a str,
    /// Declarations ordered like their records; always at least two.
    pub instances: Vec<ConflictInstance<'a>>,
}

impl ConflictGroup<'_> {
    /// The active declaration.
    #[must_use]
    pub fn winner(&self) -> Option<&ConflictInstance<'_>> {
        self.instances.last()
    }
}

/// Group declarations by name and return one [`ConflictGroup`] per name
/// declared in at least two records, sorted by name.
#[must_use]
pub fn resolve(records: &[DiscoveryRecord]) -> Vec<ConflictGroup<'_>> {
    let mut by_name: BTreeMap<&str, Vec<(&ConfigSource, &ServerDeclaration)>> = BTreeMap::new();
    for record in records {
        for server in &record.servers {
            by_name
                .entry(server.name.as_str())
                .or_default()
                .push((&record.source, server));
        }
    }

    by_name
        .into_iter()
        .filter(|(_, decls)| decls.len() >= 2)
        .map(|(name, decls)| {
            let last = decls.len() - 1;
            let instances = decls
                .into_iter()
                .enumerate()
                .map(|(i, (source, server))| ConflictInstance {
                    source,
                    server,
                    status: if i == last {
                        Resolution::Active
                    } else {
                        Resolution::Overridden
                    },
                })
                .collect();
            ConflictGroup { name, instances }
        })
        .collect()
}

/// Lookup of each conflicting declaration's status, keyed by server name
/// and source identity.
#[derive(Debug, Default)]
pub struct ResolutionIndex {
    statuses: HashMap<(String, PathBuf, FormatKind), Resolution>,
}

impl ResolutionIndex {
    /// Index every instance of `groups`.
    #[must_use]
    pub fn new(groups: &[ConflictGroup<'_>]) -> Self {
        let statuses = groups
            .iter()
            .flat_map(|g| &g.instances)
            .map(|i| {
                let (dir, format) = i.source.key();
                ((i.server.name.clone(), dir, format), i.status)
            })
            .collect();
        Self { statuses }
    }

    /// Status of `server` as declared in `source`; `None` when it is not in
    /// conflict.
    #[must_use]
    pub fn status(&self, source: &ConfigSource, server: &ServerDeclaration) -> Option<Resolution> {
        let (dir, format) = source.key();
        self.statuses.get(&(server.name.clone(), dir, format)).copied()
    }
}
