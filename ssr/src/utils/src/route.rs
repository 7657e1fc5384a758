use consts::{LOGIN_PATH, POSTS_PATH, PROFILE_PATH, REELS_PATH};

/// Sign-in page that returns the viewer to `next` afterwards.
pub fn login_redirect(next: &str) -> String {
    if next.is_empty() || next == "/" {
        return LOGIN_PATH.to_string();
    }
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(next))
}

pub fn reel_path(id: &str) -> String {
    format!("{REELS_PATH}/{}", urlencoding::encode(id))
}

pub fn post_path(id: &str) -> String {
    format!("{POSTS_PATH}/{}", urlencoding::encode(id))
}

pub fn profile_path(username: &str) -> String {
    format!("{PROFILE_PATH}/{}", urlencoding::encode(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_encodes_next() {
        assert_eq!(login_redirect("/reels?x=1"), "/login?next=%2Freels%3Fx%3D1");
        assert_eq!(login_redirect("/"), "/login");
    }

    #[test]
    fn detail_paths() {
        assert_eq!(reel_path("a b"), "/reels/a%20b");
        assert_eq!(post_path("7"), "/posts/7");
        assert_eq!(profile_path("ana"), "/profile/ana");
    }
}
