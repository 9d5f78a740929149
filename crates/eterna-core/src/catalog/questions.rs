use super::{Difficulty, QuizQuestion};

pub static QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        text: "What was the primary writing material used by ancient Egyptians?",
        options: ["Stone", "Clay", "Papyrus", "Wood"],
        correct_index: 2,
        explanation: "Papyrus was made from the papyrus plant that grew along the Nile River and became the primary writing material in ancient Egypt.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        text: "Which river was essential to ancient Egyptian civilization?",
        options: ["Euphrates", "Tigris", "Nile", "Amazon"],
        correct_index: 2,
        explanation: "The Nile River provided water, fertile soil, and transportation, making it the lifeline of ancient Egyptian civilization.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        text: "What is the name of the famous boy king of Egypt?",
        options: ["Ramesses", "Tutankhamun", "Akhenaten", "Khufu"],
        correct_index: 1,
        explanation: "Tutankhamun, also known as King Tut, became pharaoh at age 9 and is famous for his intact tomb discovered in 1922.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        text: "What symbol represents eternal life in ancient Egypt?",
        options: ["Scarab", "Ankh", "Eye of Horus", "Djed"],
        correct_index: 1,
        explanation: "The Ankh symbol represented eternal life and was often carried by gods and pharaohs in Egyptian art.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        text: "Which animal was considered sacred to the goddess Bastet?",
        options: ["Dog", "Cat", "Bird", "Snake"],
        correct_index: 1,
        explanation: "Cats were sacred to Bastet, the goddess of protection, fertility, and motherhood. Killing a cat was punishable by death.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        text: "Who was the last active pharaoh of ancient Egypt?",
        options: ["Nefertiti", "Hatshepsut", "Cleopatra VII", "Ankhesenamun"],
        correct_index: 2,
        explanation: "Cleopatra VII was the last active pharaoh of Egypt, ruling until her death in 30 BCE when Egypt became a Roman province.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        text: "What was the primary purpose of mummification?",
        options: ["Religious ceremony", "Preserve body for afterlife", "Show wealth", "Honor the gods"],
        correct_index: 1,
        explanation: "Mummification preserved the body for the afterlife, as Egyptians believed the soul needed an intact body to live eternally.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        text: "Which pharaoh built the Great Pyramid of Giza?",
        options: ["Khafre", "Khufu", "Menkaure", "Djoser"],
        correct_index: 1,
        explanation: "Khufu (also known as Cheops) built the Great Pyramid of Giza around 2580-2560 BCE during the Fourth Dynasty.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        text: "What does the word 'pharaoh' originally mean?",
        options: ["King", "God", "Great House", "Ruler"],
        correct_index: 2,
        explanation: "The word 'pharaoh' comes from the Egyptian 'per-aa' meaning 'Great House,' originally referring to the royal palace.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        text: "Which god was considered the king of the Egyptian gods?",
        options: ["Osiris", "Horus", "Ra", "Anubis"],
        correct_index: 2,
        explanation: "Ra, the sun god, was considered the king of the gods and was often combined with other deities like Amun to form Amun-Ra.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        text: "What was the name of Akhenaten's new capital city?",
        options: ["Memphis", "Thebes", "Amarna", "Alexandria"],
        correct_index: 2,
        explanation: "Akhenaten built a new capital called Amarna (ancient Akhetaten) dedicated to the sun god Aten during his religious revolution.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        text: "Which Egyptian queen ruled as pharaoh for about 22 years?",
        options: ["Nefertiti", "Hatshepsut", "Cleopatra", "Nefertari"],
        correct_index: 1,
        explanation: "Hatshepsut was one of the most successful female pharaohs, ruling for about 22 years during the 18th Dynasty.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        text: "What was the Egyptian name for the afterlife?",
        options: ["Duat", "Aaru", "Amenti", "Sekhet-Aaru"],
        correct_index: 0,
        explanation: "The Duat was the Egyptian underworld, the realm of the dead where souls journeyed after death to reach the afterlife.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        text: "Which pharaoh signed the world's first known peace treaty?",
        options: ["Thutmose III", "Ramesses II", "Seti I", "Amenhotep III"],
        correct_index: 1,
        explanation: "Ramesses II signed the Egyptian-Hittite peace treaty around 1259 BCE, the first known peace treaty in history.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        text: "What was the Egyptian calendar based on?",
        options: ["Moon phases", "Nile flood cycle", "Star positions", "Solar year"],
        correct_index: 1,
        explanation: "The Egyptian calendar was based on the annual flooding of the Nile River, which divided the year into three seasons.",
        difficulty: Difficulty::Hard,
    },
];
