use super::LocaleKey;

pub(super) fn lookup(key: LocaleKey) -> &'static str {
    match key {
        LocaleKey::AppTitle => "Nix 1 AI Assistant",
        LocaleKey::ChatHistory => "Chat History",
        LocaleKey::NewChat => "New Chat",
        LocaleKey::Settings => "Settings",
        LocaleKey::ClearHistory => "Clear All History",
        LocaleKey::WelcomeMessage => "How can I help you today?",
        LocaleKey::ChatPlaceholder => "Ask me anything, or type '/' for commands...",
        LocaleKey::ErrorPrefix => "Error:",
        LocaleKey::Theme => "Theme",
        LocaleKey::Light => "Light",
        LocaleKey::Dark => "Dark",
        LocaleKey::Language => "Language",
        LocaleKey::English => "English",
        LocaleKey::Arabic => "Arabic",
        LocaleKey::SaveChatHistory => "Save Chat History",
        LocaleKey::SaveHistoryDescription => "Automatically save your conversations locally.",
        LocaleKey::HelpCommandName => "/help",
        LocaleKey::HelpCommandDescription => "Shows the help message.",
        LocaleKey::ImageCommandName => "/image",
        LocaleKey::ImageCommandDescription => "Generates an image from a prompt.",
        LocaleKey::VoiceCommandName => "/voice",
        LocaleKey::VoiceCommandDescription => "Responds with a spoken voice.",
        LocaleKey::JokeCommandName => "/joke",
        LocaleKey::JokeCommandDescription => "Tells a random joke.",
        LocaleKey::StoryCommandName => "/story",
        LocaleKey::StoryCommandDescription => "Writes a short story.",
        LocaleKey::SearchCommandName => "/search",
        LocaleKey::SearchCommandDescription => "Searches the web for info.",
        LocaleKey::DeepresearchCommandName => "/deepresearch",
        LocaleKey::DeepresearchCommandDescription => "Performs in-depth research.",
        LocaleKey::ArticleCommandName => "/article",
        LocaleKey::ArticleCommandDescription => "Generates a well-structured article.",
        LocaleKey::RoleCommandName => "/role",
        LocaleKey::RoleCommandDescription => "Sets the AI's persona for the chat.",
        LocaleKey::ClearCommandName => "/clear",
        LocaleKey::ClearCommandDescription => "Starts a new chat session.",
        LocaleKey::DefaultSystemInstruction => {
            "You are a helpful and friendly AI assistant named Nix.
- If the user asks for code, you must wrap it in markdown code fences with the language name (e.g., ```javascript).
- Keep your responses concise and helpful."
        }
        LocaleKey::HelpMessage => {
            "Here are the available commands:
- `/help`: Shows this help message.
- `/image <prompt> [--ar <ratio>]`: Generates an image.
    - You can specify styles like \"in the style of Van Gogh\".
    - Use `--ar` to set aspect ratio. Supported ratios: 1:1, 16:9, 9:16, 4:3, 3:4.
    - Example: `/image a cat --ar 16:9`
- `/voice <prompt>`: Responds with your prompt in a spoken voice.
- `/joke`: Tells a random joke.
- `/story [topic]`: Writes a short story, optionally about a given topic.
- `/search <query>`: Searches the web for up-to-date information.
- `/deepresearch <topic>`: Performs in-depth research and provides a summary with sources.
- `/article <topic>`: Generates a well-structured article on a given topic.
- `/role <persona>`: Assigns a role to the AI for the current chat. Example: `/role You are a pirate`
- `/clear`: Starts a new chat session."
        }
        LocaleKey::ImagePromptMissing => "Please provide a prompt for the image.",
        LocaleKey::VoicePromptMissing => "Please provide a prompt for me to say.",
        LocaleKey::SearchQueryMissing => "Please provide a search query after /search.",
        LocaleKey::ResearchTopicMissing => {
            "Please provide a topic for deep research after /deepresearch."
        }
        LocaleKey::ArticleTopicMissing => "Please provide a topic for the article after /article.",
        LocaleKey::JokePrompt => "Tell me a joke.",
        LocaleKey::StoryPrompt => "Tell me a short story.",
        LocaleKey::StoryTopicPrompt => "Tell me a short story about {0}.",
        LocaleKey::DeepResearchPrompt => {
            "Perform a deep research on the following topic: \"{0}\". Synthesize information from multiple sources, identify key points, and provide a comprehensive and detailed summary."
        }
        LocaleKey::ArticleSystemInstruction => {
            "{0}

Regardless of your current persona, your primary task is to generate a well-structured and informative article on the given topic.
The article must include:
1. A clear and engaging title (using a markdown heading like '# Title').
2. A brief introduction that hooks the reader.
3. A body with several paragraphs, using headings to organize sections where appropriate.
4. A concluding paragraph that summarizes the key points."
        }
        LocaleKey::RoleSetConfirmation => "Okay, I will now act as: {0}",
        LocaleKey::UnexpectedError => "An unexpected error occurred.",
        LocaleKey::ConfirmClearHistory => {
            "Are you sure you want to delete all chat history? This action cannot be undone."
        }
    }
}
