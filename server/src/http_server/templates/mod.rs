use maud::{html, Markup, DOCTYPE};

pub(crate) mod blur_fade;
pub(crate) mod post_templates;

pub(crate) struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub canonical_url: String,
}

pub fn head(metadata: &PageMetadata) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";

        title { (metadata.title) }
        meta name="description" content=(metadata.description);
        link rel="canonical" href=(metadata.canonical_url);

        meta property="og:title" content=(metadata.title);
        meta property="og:description" content=(metadata.description);
        meta property="og:url" content=(metadata.canonical_url);

        link rel="stylesheet" href="/styles/blog.css" {}
        link rel="stylesheet" href="/styles/blur-fade.css" {}
      }
    }
}

pub fn base(inner: Markup, metadata: &PageMetadata) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head(metadata))

        body class="mx-auto max-w-2xl px-6 py-12 sm:py-24 antialiased" {
          main {
            (inner)
          }
        }
      }
    }
}
