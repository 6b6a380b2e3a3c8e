use std::path::Path;

use posts::blog::BlogPosts;

use crate::{http_server::STATIC_ASSETS, Result};

pub(crate) fn validate() -> Result<()> {
    let posts = BlogPosts::from_static_dir()?;

    validate_posts(&posts)?;
    println!("Posts Valid! ✅");

    Ok(())
}

fn validate_posts(posts: &BlogPosts) -> Result<()> {
    println!("Validating {} posts", posts.posts().len());
    for post in posts.posts() {
        println!("Validating {}...", post.path.display());
    }

    posts.validate(static_asset_exists)?;

    Ok(())
}

fn static_asset_exists(path: &Path) -> bool {
    STATIC_ASSETS.get_file(path).is_some()
}
