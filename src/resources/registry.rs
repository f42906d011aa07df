//! Registry of the workload kinds the scale command can address

use std::collections::HashMap;
use std::sync::LazyLock;

/// Information about a scalable workload type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub kind: &'static str,
    pub group: &'static str,
    pub version: &'static str,
    pub plural: &'static str,
    pub aliases: &'static [&'static str],
    pub namespaced: bool,
}

/// The workloads whose scale sub-resource this tool knows how to drive.
/// The first entry is the kind implied by a bare resource name.
static WORKLOADS: &[ResourceInfo] = &[
    ResourceInfo {
        kind: "Deployment",
        group: "apps",
        version: "v1",
        plural: "deployments",
        aliases: &["deploy"],
        namespaced: true,
    },
    ResourceInfo {
        kind: "StatefulSet",
        group: "apps",
        version: "v1",
        plural: "statefulsets",
        aliases: &["sts"],
        namespaced: true,
    },
    ResourceInfo {
        kind: "ReplicaSet",
        group: "apps",
        version: "v1",
        plural: "replicasets",
        aliases: &["rs"],
        namespaced: true,
    },
];

/// Global registry of scalable workload kinds
pub static SCALABLE_REGISTRY: LazyLock<ScalableRegistry> = LazyLock::new(ScalableRegistry::new);

/// Registry for looking up workload types by kind, plural, or alias
pub struct ScalableRegistry {
    by_name: HashMap<String, &'static ResourceInfo>,
}

impl ScalableRegistry {
    fn new() -> Self {
        let mut by_name = HashMap::new();

        for info in WORKLOADS {
            by_name.insert(info.kind.to_lowercase(), info);
            by_name.insert(info.plural.to_string(), info);
            for alias in info.aliases {
                by_name.insert(alias.to_string(), info);
            }
        }

        Self { by_name }
    }

    /// Look up a workload type by kind, plural, or alias (case-insensitive)
    pub fn lookup(&self, name: &str) -> Option<&'static ResourceInfo> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// The kind implied when the positional argument is a bare resource name
    pub fn default_kind(&self) -> &'static ResourceInfo {
        &WORKLOADS[0]
    }

    /// All kind names, plurals, and aliases this registry resolves
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
