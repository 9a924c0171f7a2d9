use web_sys as web;

/// Reflect the synthesizer state on the mute toggle: label, aria-pressed
/// (pressed = muted) and the ghost styling class.
pub fn set_audio_toggle_state(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id("audio-toggle") {
        el.set_text_content(Some(if playing { "🔊 Unmute" } else { "🔈 Mute" }));
        _ = el.set_attribute("aria-pressed", if playing { "false" } else { "true" });
        let cl = el.class_list();
        if playing {
            _ = cl.remove_1("ghost");
        } else {
            _ = cl.add_1("ghost");
        }
    }
}
