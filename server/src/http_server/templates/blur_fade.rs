use maud::{html, Markup, Render};

/// Wraps `inner` in an element that fades in after `delay` seconds.
pub struct BlurFade {
    inner: Markup,
    delay: f64,
    additional_classes: Option<String>,
}

impl BlurFade {
    pub fn new(inner: Markup, delay: f64) -> Self {
        Self {
            inner,
            delay,
            additional_classes: None,
        }
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.additional_classes = Some(classes.into());
        self
    }

    fn classes(&self) -> String {
        match &self.additional_classes {
            Some(classes) => format!("blur-fade {classes}"),
            None => "blur-fade".to_string(),
        }
    }
}

impl Render for BlurFade {
    fn render(&self) -> Markup {
        html! {
          div class=(self.classes()) style=(format!("animation-delay: {:.2}s", self.delay)) {
            (self.inner)
          }
        }
    }
}
