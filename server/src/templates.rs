//! The greeting template set and how one is chosen.

use rand::Rng;

/// Placeholder substituted with the caller's name.
pub const PLACEHOLDER: &str = "{name}";

/// Fixed, non-empty template set. Each entry has exactly one placeholder.
pub const GREETINGS: [&str; 10] = [
    "Hello there, {name}! You look particularly radiant today.",
    "Greetings, {name}! Your digital presence brightens our server.",
    "Well, well, well, if it isn't the legendary {name}!",
    "Welcome back, {name}! We've missed your HTTP requests.",
    "Oh my, {name}! What a pleasant surprise to see you in our API logs.",
    "{name}, fancy meeting you here in this corner of the internet!",
    "Ahoy, {name}! Ready to navigate the seas of our API together?",
    "Look who decided to send a GET request today - it's {name}!",
    "The incomparable {name} has graced us with their presence!",
    "A wild {name} appears! *Server used greeting. It's super effective!*",
];

/// Chooses which template to use.
pub trait TemplatePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl TemplatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Substitute `name` into `template`.
pub fn render(template: &str, name: &str) -> String {
    template.replacen(PLACEHOLDER, name, 1)
}

/// Pick a template and render it for `name`. Out-of-range picks wrap.
pub fn greeting_for(picker: &dyn TemplatePicker, name: &str) -> String {
    let index = picker.pick(GREETINGS.len()) % GREETINGS.len();
    render(GREETINGS[index], name)
}
