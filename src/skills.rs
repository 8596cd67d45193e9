/// Shape of a badge in the skills cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Pill,
    Circle,
    Rect,
}

impl Badge {
    pub fn class(self) -> &'static str {
        match self {
            Badge::Pill => "skill-badge rounded-full px-4 py-2",
            Badge::Circle => "skill-badge rounded-full w-12 h-12 justify-center",
            Badge::Rect => "skill-badge rounded-md px-3 py-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub badge: Badge,
}

const ICONS: &[(&str, &str)] = &[
    ("HTML5", "devicon-html5-plain"),
    ("JavaScript", "devicon-javascript-plain"),
    ("React", "devicon-react-original"),
    ("CSS3", "devicon-css3-plain"),
    ("SCSS/SASS", "devicon-sass-original"),
    ("Bootstrap", "devicon-bootstrap-plain"),
    ("Node.js", "devicon-nodejs-plain"),
    ("Express.js", "devicon-express-original"),
    ("MongoDB", "devicon-mongodb-plain"),
    ("TypeScript", "devicon-typescript-plain"),
    ("Tailwind", "devicon-tailwindcss-original"),
    ("Git", "devicon-git-plain"),
];

/// Devicon class for a technology name, matched case-insensitively.
pub fn skill_icon(name: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, class)| *class)
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", badge: Badge::Rect },
    Skill { name: "CSS3", badge: Badge::Rect },
    Skill { name: "JavaScript", badge: Badge::Pill },
    Skill { name: "TypeScript", badge: Badge::Pill },
    Skill { name: "React", badge: Badge::Circle },
    Skill { name: "Node.js", badge: Badge::Pill },
    Skill { name: "Express.js", badge: Badge::Rect },
    Skill { name: "MongoDB", badge: Badge::Pill },
    Skill { name: "SCSS/SASS", badge: Badge::Rect },
    Skill { name: "Tailwind", badge: Badge::Pill },
    Skill { name: "Bootstrap", badge: Badge::Rect },
    Skill { name: "Git", badge: Badge::Circle },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_lookup() {
        assert_eq!(skill_icon("React"), Some("devicon-react-original"));
        assert_eq!(skill_icon("typescript"), Some("devicon-typescript-plain"));
        assert_eq!(skill_icon(" Tailwind "), Some("devicon-tailwindcss-original"));
        assert_eq!(skill_icon("GSAP"), None);
        assert_eq!(skill_icon("Spotify API"), None);
    }

    #[test]
    fn test_every_listed_skill_has_an_icon() {
        for skill in SKILLS {
            assert!(skill_icon(skill.name).is_some(), "{} has no icon", skill.name);
        }
    }
}
