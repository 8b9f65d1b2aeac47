//! HTML pages, rendered with minijinja from templates compiled into the binary

use di::inject;
use di::injectable;
use minijinja::{Environment, context};

const LOGIN: &str = "login.html";
const CHAT: &str = "chat.html";

pub struct Templates {
    env: Environment<'static>,
}

#[injectable]
impl Templates {
    #[inject]
    pub fn create() -> Templates {
        let mut env = Environment::new();
        env.add_template(LOGIN, include_str!("../../templates/login.html"))
            .expect("login template should parse");
        env.add_template(CHAT, include_str!("../../templates/chat.html"))
            .expect("chat template should parse");

        Templates { env }
    }
}

impl Templates {
    pub fn login_page(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(LOGIN)?.render(context! {})
    }

    /// The username is HTML-escaped on interpolation.
    pub fn chat_page(&self, username: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template(CHAT)?
            .render(context! { username => username })
    }
}
