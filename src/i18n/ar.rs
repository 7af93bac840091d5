use super::LocaleKey;

pub(super) fn lookup(key: LocaleKey) -> &'static str {
    match key {
        LocaleKey::AppTitle => "مساعد Nix 1 الذكي",
        LocaleKey::ChatHistory => "سجل المحادثات",
        LocaleKey::NewChat => "محادثة جديدة",
        LocaleKey::Settings => "الإعدادات",
        LocaleKey::ClearHistory => "مسح كل السجل",
        LocaleKey::WelcomeMessage => "كيف يمكنني مساعدتك اليوم؟",
        LocaleKey::ChatPlaceholder => "اسألني أي شيء، أو اكتب '/' لعرض الأوامر...",
        LocaleKey::ErrorPrefix => "خطأ:",
        LocaleKey::Theme => "المظهر",
        LocaleKey::Light => "فاتح",
        LocaleKey::Dark => "داكن",
        LocaleKey::Language => "اللغة",
        LocaleKey::English => "الإنجليزية",
        LocaleKey::Arabic => "العربية",
        LocaleKey::SaveChatHistory => "حفظ سجل المحادثات",
        LocaleKey::SaveHistoryDescription => "حفظ محادثاتك تلقائيًا على جهازك.",
        LocaleKey::HelpCommandName => "/مساعدة",
        LocaleKey::HelpCommandDescription => "يعرض رسالة المساعدة.",
        LocaleKey::ImageCommandName => "/صورة",
        LocaleKey::ImageCommandDescription => "ينشئ صورة من وصف نصي.",
        LocaleKey::VoiceCommandName => "/صوت",
        LocaleKey::VoiceCommandDescription => "يرد بصوت منطوق.",
        LocaleKey::JokeCommandName => "/نكتة",
        LocaleKey::JokeCommandDescription => "يروي نكتة عشوائية.",
        LocaleKey::StoryCommandName => "/قصة",
        LocaleKey::StoryCommandDescription => "يكتب قصة قصيرة.",
        LocaleKey::SearchCommandName => "/بحث",
        LocaleKey::SearchCommandDescription => "يبحث في الويب عن معلومات.",
        LocaleKey::DeepresearchCommandName => "/بحث_عميق",
        LocaleKey::DeepresearchCommandDescription => "يجري بحثًا معمقًا.",
        LocaleKey::ArticleCommandName => "/مقالة",
        LocaleKey::ArticleCommandDescription => "ينشئ مقالة متكاملة.",
        LocaleKey::RoleCommandName => "/دور",
        LocaleKey::RoleCommandDescription => "يحدد شخصية المساعد لهذه المحادثة.",
        LocaleKey::ClearCommandName => "/مسح",
        LocaleKey::ClearCommandDescription => "يبدأ جلسة محادثة جديدة.",
        LocaleKey::DefaultSystemInstruction => {
            "أنت مساعد ذكاء اصطناعي ودود ومتعاون اسمك Nix.
- إذا طلب المستخدم كودًا برمجيًا، يجب عليك وضعه داخل علامات الماركداون مع تحديد اللغة (مثال: ```javascript).
- حافظ على إجاباتك مختصرة ومفيدة."
        }
        LocaleKey::HelpMessage => {
            "الأوامر المتاحة هي:
- `/مساعدة`: يعرض رسالة المساعدة هذه.
- `/صورة <وصف> [--ar <نسبة>]`: ينشئ صورة.
    - يمكنك تحديد الأنماط الفنية مثل \"بأسلوب فان جوخ\".
    - استخدم `--ar` لتحديد نسبة العرض إلى الارتفاع. النسب المدعومة: 1:1, 16:9, 9:16, 4:3, 3:4.
    - مثال: `/صورة قطة --ar 16:9`
- `/صوت <نص>`: يرد بنصك بصوت منطوق.
- `/نكتة`: يروي نكتة عشوائية.
- `/قصة [موضوع]`: يكتب قصة قصيرة، ويمكن تحديد موضوعها.
- `/بحث <استعلام>`: يبحث في الويب عن معلومات حديثة.
- `/بحث_عميق <موضوع>`: يجري بحثًا معمقًا ويقدم ملخصًا مع المصادر.
- `/مقالة <موضوع>`: ينشئ مقالة متكاملة حول موضوع معين.
- `/دور <شخصية>`: يحدد شخصية للمساعد في المحادثة الحالية. مثال: `/دور أنت قرصان`
- `/مسح`: يبدأ جلسة محادثة جديدة."
        }
        LocaleKey::ImagePromptMissing => "يرجى تقديم وصف للصورة.",
        LocaleKey::VoicePromptMissing => "يرجى تقديم نص لأقوم بنطقه.",
        LocaleKey::SearchQueryMissing => "يرجى تقديم استعلام بحث بعد /بحث.",
        LocaleKey::ResearchTopicMissing => "يرجى تقديم موضوع للبحث المعمق بعد /بحث_عميق.",
        LocaleKey::ArticleTopicMissing => "يرجى تقديم موضوع للمقالة بعد /مقالة.",
        LocaleKey::JokePrompt => "أخبرني نكتة.",
        LocaleKey::StoryPrompt => "أخبرني قصة قصيرة.",
        LocaleKey::StoryTopicPrompt => "أخبرني قصة قصيرة عن {0}.",
        LocaleKey::DeepResearchPrompt => {
            "قم بإجراء بحث معمق حول الموضوع التالي: \"{0}\". اجمع المعلومات من مصادر متعددة، وحدد النقاط الرئيسية، وقدم ملخصًا شاملاً ومفصلاً."
        }
        LocaleKey::ArticleSystemInstruction => {
            "{0}

بغض النظر عن شخصيتك الحالية، مهمتك الأساسية هي إنشاء مقالة جيدة التنظيم وغنية بالمعلومات حول الموضوع المحدد.
يجب أن تتضمن المقالة:
1. عنوان واضح وجذاب (باستخدام تنسيق ماركداون مثل '# العنوان').
2. مقدمة موجزة تجذب القارئ.
3. متن المقالة مع عدة فقرات، باستخدام عناوين فرعية لتنظيم الأقسام عند الحاجة.
4. فقرة ختامية تلخص النقاط الرئيسية."
        }
        LocaleKey::RoleSetConfirmation => "حسنًا، سأقوم الآن بدور: {0}",
        LocaleKey::UnexpectedError => "حدث خطأ غير متوقع.",
        LocaleKey::ConfirmClearHistory => {
            "هل أنت متأكد من أنك تريد حذف كل سجل المحادثات؟ لا يمكن التراجع عن هذا الإجراء."
        }
    }
}
