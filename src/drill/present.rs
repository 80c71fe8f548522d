use crate::lookup::metadata::WordMetadata;
use crate::nav::Message;

/// Build the message stack shown above the spelling prompt: usage hint,
/// phonetics line, then one section per meaning (part of speech,
/// definitions, synonyms, antonyms).
pub fn drill_messages(meta: &WordMetadata) -> Vec<Message> {
    let mut messages = vec![Message::plain("Enter 'r' to repeat, leave empty to skip.")];

    let phonetics = meta.phonetic_line();
    if phonetics.is_empty() {
        messages.push(Message::warning("Phonetics: (listen)"));
    } else {
        messages.push(Message::warning(format!("Phonetics: {phonetics}")));
    }

    for meaning in &meta.meanings {
        if let Some(part_of_speech) = &meaning.part_of_speech {
            messages.push(Message::muted(part_of_speech.clone()));
        }
        if !meaning.definitions.is_empty() {
            messages.push(Message::warning(" Definitions:"));
            for definition in &meaning.definitions {
                messages.push(Message::plain(format!(" - {definition}")));
            }
        }
        if !meaning.synonyms.is_empty() {
            messages.push(Message::warning(" Synonyms:"));
            for synonym in &meaning.synonyms {
                messages.push(Message::plain(format!(" - {synonym}")));
            }
        }
        if !meaning.antonyms.is_empty() {
            messages.push(Message::warning(" Antonyms:"));
            for antonym in &meaning.antonyms {
                messages.push(Message::plain(format!(" - {antonym}")));
            }
        }
    }

    if meta.meanings.is_empty() {
        messages.push(Message::muted("No definitions available for this word."));
    }

    messages
}
