use super::commit::CommitRecord;

/// The four changelog buckets, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Breaking,
    Features,
    Fixes,
    Other,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Breaking,
        Section::Features,
        Section::Fixes,
        Section::Other,
    ];

    /// Heading used for this bucket in changelogs and release notes
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Breaking => "⚠ BREAKING CHANGES",
            Section::Features => "✨ Features",
            Section::Fixes => "🐛 Bug Fixes",
            Section::Other => "📝 Other Changes",
        }
    }

    /// Bucket a record belongs to. Breaking wins over the commit type.
    pub fn of(record: &CommitRecord) -> Section {
        if record.breaking {
            return Section::Breaking;
        }
        match record.commit_type.as_str() {
            "feat" => Section::Features,
            "fix" => Section::Fixes,
            _ => Section::Other,
        }
    }
}

/// Commit records partitioned into disjoint buckets, input order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub breaking: Vec<CommitRecord>,
    pub feat: Vec<CommitRecord>,
    pub fix: Vec<CommitRecord>,
    pub other: Vec<CommitRecord>,
}

impl ChangeSet {
    /// Stable single-pass partition of `records`
    pub fn classify(records: impl IntoIterator<Item = CommitRecord>) -> Self {
        let mut changes = ChangeSet::default();
        for record in records {
            let bucket = match Section::of(&record) {
                Section::Breaking => &mut changes.breaking,
                Section::Features => &mut changes.feat,
                Section::Fixes => &mut changes.fix,
                Section::Other => &mut changes.other,
            };
            bucket.push(record);
        }
        changes
    }

    /// Parse and classify raw commit messages
    pub fn from_messages<S: AsRef<str>>(messages: &[S]) -> Self {
        Self::classify(messages.iter().map(|m| CommitRecord::parse(m.as_ref())))
    }

    pub fn bucket(&self, section: Section) -> &[CommitRecord] {
        match section {
            Section::Breaking => &self.breaking,
            Section::Features => &self.feat,
            Section::Fixes => &self.fix,
            Section::Other => &self.other,
        }
    }

    /// Non-empty buckets in rendering order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &[CommitRecord])> + '_ {
        Section::ALL
            .into_iter()
            .map(move |section| (section, self.bucket(section)))
            .filter(|(_, records)| !records.is_empty())
    }

    pub fn len(&self) -> usize {
        self.breaking.len() + self.feat.len() + self.fix.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
