use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use include_dir::{include_dir, Dir, File};
use path_absolutize::Absolutize;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::{
    date::{PostedOn, PublishedAt},
    MarkdownAst,
};

static BLOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../blog");

const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Prefix under which local images are served.
pub const STATIC_PREFIX: &str = "/static/";

#[derive(Debug, Clone)]
pub struct BlogPosts {
    posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub slug: String,
    pub metadata: BlogMetadata,
    pub path: PathBuf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    pub title: String,
    pub published_at: PublishedAt,
    pub summary: String,
    pub image: String,
}

impl PostedOn for BlogMetadata {
    fn posted_on(&self) -> DateTime<Utc> {
        self.published_at.at()
    }
}

impl PostedOn for BlogPost {
    fn posted_on(&self) -> DateTime<Utc> {
        self.metadata.posted_on()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Slug `{0}` is used by more than one post")]
    DuplicateSlug(String),
    #[error("Post `{0}` has an empty title")]
    EmptyTitle(String),
    #[error("Post `{0}` has an empty summary")]
    EmptySummary(String),
    #[error("Post `{slug}` points at image {image} which does not exist")]
    MissingImage { slug: String, image: String },
    #[error("Post `{slug}` points at image {image} which is neither remote nor under /static/")]
    UnservableImage { slug: String, image: String },
}

impl BlogPost {
    pub fn from_contents(path: &Path, contents: &str) -> Result<Self> {
        let slug = path
            .file_stem()
            .ok_or_else(|| eyre!("Post path {} has no file name", path.display()))?
            .to_string_lossy()
            .to_string();

        let ast: MarkdownAst = contents.parse()?;
        let metadata: BlogMetadata = ast.frontmatter()?;

        Ok(BlogPost {
            slug,
            metadata,
            path: path.to_owned(),
        })
    }

    fn from_file(file: &File) -> Result<Self> {
        let contents = file
            .contents_utf8()
            .ok_or_else(|| eyre!("File {} is not UTF8", file.path().display()))?;

        Self::from_contents(file.path(), contents)
            .wrap_err_with(|| format!("Could not load post {}", file.path().display()))
    }

    /// Checks the fields of a single post. `asset_exists` is asked about
    /// local images, relative to [`STATIC_PREFIX`].
    pub fn validate(&self, asset_exists: impl Fn(&Path) -> bool) -> Result<(), ValidationError> {
        if self.metadata.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle(self.slug.clone()));
        }

        if self.metadata.summary.trim().is_empty() {
            return Err(ValidationError::EmptySummary(self.slug.clone()));
        }

        self.validate_image(asset_exists)
    }

    fn validate_image(&self, asset_exists: impl Fn(&Path) -> bool) -> Result<(), ValidationError> {
        let image = &self.metadata.image;

        if image.starts_with("http://") || image.starts_with("https://") {
            return Ok(());
        }

        let unservable = || ValidationError::UnservableImage {
            slug: self.slug.clone(),
            image: image.clone(),
        };

        let cleaned = Path::new(image)
            .absolutize_virtually("/")
            .map_err(|_| unservable())?;
        let cleaned = cleaned.to_string_lossy().to_string();

        let Some(relative) = cleaned.strip_prefix(STATIC_PREFIX) else {
            return Err(unservable());
        };

        if asset_exists(Path::new(relative)) {
            Ok(())
        } else {
            Err(ValidationError::MissingImage {
                slug: self.slug.clone(),
                image: image.clone(),
            })
        }
    }
}

fn is_post_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
}

impl BlogPosts {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    pub fn from_static_dir() -> Result<Self> {
        Self::from_dir(&BLOG_DIR)
    }

    #[instrument(skip_all)]
    pub fn from_dir(dir: &Dir) -> Result<Self> {
        let mut files: Vec<&File> = dir
            .find("**/*")
            .wrap_err("Could not search the blog directory")?
            .filter_map(|e| e.as_file())
            .filter(|f| is_post_path(f.path()))
            .collect();
        files.sort_by(|a, b| a.path().cmp(b.path()));

        let posts = files
            .into_iter()
            .map(BlogPost::from_file)
            .collect::<Result<Vec<_>>>()
            .wrap_err("One of the blog posts failed to parse")?;

        tracing::debug!(count = posts.len(), "Loaded embedded blog posts");

        Ok(Self { posts })
    }

    /// Reads every post below `root` from disk. Paths are stored relative to `root`.
    #[instrument]
    pub fn from_path(root: &Path) -> Result<Self> {
        let mut paths = vec![];
        collect_post_paths(root, &mut paths)
            .wrap_err_with(|| format!("Could not list blog directory {}", root.display()))?;
        paths.sort();

        let posts = paths
            .into_iter()
            .map(|path| {
                let contents = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("Could not read {}", path.display()))?;
                let relative = path.strip_prefix(root).unwrap_or(&path);

                BlogPost::from_contents(relative, &contents)
                    .wrap_err_with(|| format!("Could not load post {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()
            .wrap_err("One of the blog posts failed to parse")?;

        tracing::debug!(count = posts.len(), "Loaded blog posts from disk");

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &Vec<BlogPost> {
        &self.posts
    }

    pub fn into_posts(self) -> Vec<BlogPost> {
        self.posts
    }

    pub fn ensure_unique_slugs(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();

        for post in &self.posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(ValidationError::DuplicateSlug(post.slug.clone()));
            }
        }

        Ok(())
    }

    pub fn validate(&self, asset_exists: impl Fn(&Path) -> bool) -> Result<(), ValidationError> {
        self.ensure_unique_slugs()?;

        self.posts
            .iter()
            .try_for_each(|post| post.validate(&asset_exists))
    }
}

fn collect_post_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            collect_post_paths(&path, paths)?;
        } else if is_post_path(&path) {
            paths.push(path);
        }
    }

    Ok(())
}
