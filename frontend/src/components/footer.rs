use yew::prelude::*;

struct Social {
    name: &'static str,
    icon: &'static str,
    link: &'static str,
}

const SOCIALS: [Social; 5] = [
    Social {
        name: "LinkedIn",
        icon: "https://raw.githubusercontent.com/rahuldkjain/github-profile-readme-generator/master/src/images/icons/Social/linked-in-alt.svg",
        link: "https://linkedin.com/in/obinopaul",
    },
    Social {
        name: "Github",
        icon: "https://raw.githubusercontent.com/rahuldkjain/github-profile-readme-generator/master/src/images/icons/Social/github.svg",
        link: "https://github.com/obinopaul",
    },
    Social {
        name: "Facebook",
        icon: "https://raw.githubusercontent.com/rahuldkjain/github-profile-readme-generator/master/src/images/icons/Social/facebook.svg",
        link: "https://fb.com/paultwizzy",
    },
    Social {
        name: "Instagram",
        icon: "https://raw.githubusercontent.com/rahuldkjain/github-profile-readme-generator/master/src/images/icons/Social/instagram.svg",
        link: "https://www.instagram.com/obinopaul/",
    },
    Social {
        name: "Personal Website",
        icon: "https://cdn.jsdelivr.net/npm/simple-icons@3.0.1/icons/codepen.svg",
        link: "https://obinopaul.com/",
    },
];

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="attribution">{"Made by Paul Okafor"}</p>
            <div class="socials">
                { for SOCIALS.iter().map(|social| html! {
                    <a href={social.link} title={social.name} target="_blank" rel="noopener noreferrer">
                        <img src={social.icon} alt={social.name} />
                    </a>
                }) }
            </div>
        </footer>
    }
}
