use std::str::FromStr;

use color_eyre::{
    eyre::{eyre, Context, Report},
    Result,
};
use markdown::{
    mdast::{Node, Root},
    to_mdast, ParseOptions,
};
use serde::Deserialize;

pub mod blog;
pub mod date;

#[derive(Clone, Debug)]
pub struct MarkdownAst(pub Root);

impl FromStr for MarkdownAst {
    type Err = Report;

    fn from_str(contents: &str) -> Result<Self> {
        let mut options: ParseOptions = ParseOptions::default();
        options.constructs.frontmatter = true;

        match to_mdast(contents, &options) {
            Ok(Node::Root(ast)) => Ok(Self(ast)),
            Ok(_) => Err(eyre!("Should be a root node")),
            Err(e) => Err(eyre!("Could not make AST. Inner Error: {}", e)),
        }
    }
}

impl MarkdownAst {
    fn frontmatter_yml(&self) -> Result<&str> {
        let children = &self.0.children;
        let Some(Node::Yaml(frontmatter)) = children.first() else {
            return Err(eyre!("Should have a first child with YAML Frontmatter"));
        };

        Ok(&frontmatter.value)
    }

    pub fn frontmatter<T>(&self) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let yaml = self.frontmatter_yml()?;
        serde_yaml::from_str(yaml).wrap_err("Frontmatter should be valid YAML")
    }
}
