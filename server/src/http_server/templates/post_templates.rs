use maud::{html, Markup, Render};
use posts::blog::BlogPost;

use super::blur_fade::BlurFade;

/// Fade-in delay of the page heading, in seconds.
pub const BLUR_FADE_DELAY: f64 = 0.04;

/// Extra delay added for every card further down the list, in seconds.
pub const CARD_DELAY_STEP: f64 = 0.05;

pub const THUMBNAIL_SIZE: u32 = 50;

const LINK_CLASSES: &str =
    "flex flex-col space-y-1 mb-4 transition-all duration-200 ease-in-out hover:scale-[103%]";

const CARD_CLASSES: &str =
    "relative mx-auto min-h-fit w-full cursor-pointer overflow-hidden rounded-2xl p-4";

const CARD_LIGHT_CLASSES: &str = "bg-white [box-shadow:0_0_0_1px_rgba(0,0,0,.03),0_2px_4px_rgba(0,0,0,.05),0_12px_24px_rgba(0,0,0,.05)]";

const CARD_DARK_CLASSES: &str = "transform-gpu dark:bg-transparent dark:backdrop-blur-md dark:[border:1px_solid_rgba(255,255,255,.1)] dark:[box-shadow:0_-20px_80px_-20px_#ffffff1f_inset]";

/// The card at `index` starts after the heading, one step later than the card before it.
#[allow(clippy::cast_precision_loss)]
pub fn card_delay(index: usize) -> f64 {
    BLUR_FADE_DELAY * 2.0 + index as f64 * CARD_DELAY_STEP
}

pub fn blog_href(slug: &str) -> String {
    format!("/blog/{}", urlencoding::encode(slug))
}

pub(crate) struct BlogPostCard<'a> {
    pub post: &'a BlogPost,
    pub index: usize,
}

impl Render for BlogPostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        let inner = html! {
          div class="w-full flex flex-row items-center gap-4 h-full" {
            img src=(post.metadata.image) alt=(post.metadata.summary) height=(THUMBNAIL_SIZE) width=(THUMBNAIL_SIZE);
            div {
              p class="tracking-tight" { (post.metadata.title) }
              p class="h-fit text-xs text-muted-foreground" { (post.metadata.published_at) }
            }
          }
        };

        let classes = [CARD_CLASSES, CARD_LIGHT_CLASSES, CARD_DARK_CLASSES].join(" ");

        html! {
          a class=(LINK_CLASSES) href=(blog_href(&post.slug)) {
            (BlurFade::new(inner, card_delay(self.index)).with_classes(classes))
          }
        }
    }
}

/// Cards for `posts`, in the order given.
pub(crate) struct BlogPostList<'a>(pub(crate) Vec<&'a BlogPost>);

impl Render for BlogPostList<'_> {
    fn render(&self) -> Markup {
        html! {
          @for (index, post) in self.0.iter().copied().enumerate() {
            (BlogPostCard { post, index })
          }
        }
    }
}
