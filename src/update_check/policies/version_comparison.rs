use std::cmp::Ordering;

/// A parsed dotted-numeric version with an optional pre-release suffix
///
/// Accepted forms: `1`, `1.2`, `1.2.3.4`, `v1.2.3`, `1.2.3-beta.2`,
/// `1.2.3+build.7` (build metadata is ignored). Missing trailing release
/// segments count as zero, so `1.2` equals `1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentVersion {
    release: Vec<u64>,
    pre_release: Vec<PreReleaseIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PreReleaseIdentifier {
    Numeric(u64),
    Alphanumeric(String),
}

impl Ord for PreReleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use PreReleaseIdentifier::*;
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.cmp(b),
            (Numeric(_), Alphanumeric(_)) => Ordering::Less,
            (Alphanumeric(_), Numeric(_)) => Ordering::Greater,
            (Alphanumeric(a), Alphanumeric(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for PreReleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ComponentVersion {
    /// Parses a version string, returning `None` if it is not understood.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let without_build = trimmed.split('+').next().unwrap_or_default();
        let (release_part, pre_part) = match without_build.split_once('-') {
            Some((release, pre)) => (release, Some(pre)),
            None => (without_build, None),
        };

        if release_part.is_empty() {
            return None;
        }

        let release = release_part
            .split('.')
            .map(|segment| segment.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let pre_release = match pre_part {
            None => Vec::new(),
            Some(pre) => pre
                .split(['.', '-'])
                .map(|ident| {
                    if ident.is_empty() {
                        None
                    } else if let Ok(n) = ident.parse::<u64>() {
                        Some(PreReleaseIdentifier::Numeric(n))
                    } else {
                        Some(PreReleaseIdentifier::Alphanumeric(ident.to_ascii_lowercase()))
                    }
                })
                .collect::<Option<Vec<_>>>()?,
        };

        Some(Self {
            release,
            pre_release,
        })
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    fn release_segment(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }
}

impl Ord for ComponentVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.release.len().max(other.release.len());
        for index in 0..width {
            match self.release_segment(index).cmp(&other.release_segment(index)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        // A pre-release sorts below the release it precedes
        match (self.is_pre_release(), other.is_pre_release()) {
            (false, false) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => self.pre_release.cmp(&other.pre_release),
        }
    }
}

impl PartialOrd for ComponentVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// VersionComparison policy for deciding whether an update is available
///
/// Unparseable or missing versions never count as newer, so bad data
/// degrades to "no update".
pub struct VersionComparison;

impl VersionComparison {
    /// True iff `remote` is strictly greater than `installed`.
    pub fn is_newer(remote: &str, installed: &str) -> bool {
        match (
            ComponentVersion::parse(remote),
            ComponentVersion::parse(installed),
        ) {
            (Some(remote), Some(installed)) => remote > installed,
            _ => false,
        }
    }
}
