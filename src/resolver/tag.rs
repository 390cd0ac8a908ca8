//! Tags and output languages

/// Output language of a generated readme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Jp,
}

impl Language {
    /// Generation order: English first, then Japanese.
    pub const ALL: [Language; 2] = [Language::En, Language::Jp];

    /// Language code used in template and fragment file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    /// Suffix distinguishing the per-language repository README
    /// (`README.md` vs `README_jp.md`).
    pub fn readme_suffix(&self) -> &'static str {
        match self {
            Language::En => "",
            Language::Jp => "_jp",
        }
    }

    /// Fixed name of the generated file.
    pub fn output_file_name(&self) -> &'static str {
        match self {
            Language::En => "README.txt",
            Language::Jp => "お読みください.txt",
        }
    }

    /// English display name, for progress output.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Jp => "Japanese",
        }
    }
}

/// A placeholder tag understood by the resolver.
///
/// `Unknown` carries the verbatim name of any tag outside the supported set;
/// such tags resolve back to their own placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    RepositoryName,
    Author,
    TagInformation,
    Description,
    HowToUse,
    Notes,
    ReadmeUrl,
    Unknown(String),
}

impl Tag {
    pub fn from_name(name: &str) -> Tag {
        match name {
            "REPOSITORY_NAME" => Tag::RepositoryName,
            "AUTHOR" => Tag::Author,
            "TAG_INFORMATION" => Tag::TagInformation,
            "DESCRIPTION" => Tag::Description,
            "HOW_TO_USE" => Tag::HowToUse,
            "NOTES" => Tag::Notes,
            "README_URL" => Tag::ReadmeUrl,
            other => Tag::Unknown(other.to_string()),
        }
    }

    /// Canonical name, as written between `${` and `}`.
    pub fn name(&self) -> &str {
        match self {
            Tag::RepositoryName => "REPOSITORY_NAME",
            Tag::Author => "AUTHOR",
            Tag::TagInformation => "TAG_INFORMATION",
            Tag::Description => "DESCRIPTION",
            Tag::HowToUse => "HOW_TO_USE",
            Tag::Notes => "NOTES",
            Tag::ReadmeUrl => "README_URL",
            Tag::Unknown(name) => name,
        }
    }

    /// The `${NAME}` form of this tag.
    pub fn placeholder(&self) -> String {
        format!("${{{}}}", self.name())
    }

    /// Directory holding this tag's markdown fragments.
    pub fn fragment_dir(&self) -> String {
        self.name().to_lowercase()
    }
}
