use super::*;

#[test]
fn nav_links_stay_inside_their_segment() {
    for segment in Segment::ALL {
        let links = nav_links(segment);
        assert!(!links.is_empty());
        assert_eq!(links[0].1, segment.home_path());
        for (_, href) in links {
            assert!(href.starts_with(segment.home_path()), "{href} outside {segment:?}");
        }
    }
}

#[test]
fn school_nav_covers_every_school_screen() {
    let hrefs: Vec<&str> = nav_links(Segment::School).iter().map(|(_, href)| *href).collect();
    for expected in ["/school/subjects", "/school/classes", "/school/staff", "/school/students", "/school/fees"] {
        assert!(hrefs.contains(&expected));
    }
}
