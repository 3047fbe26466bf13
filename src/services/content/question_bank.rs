//! mock 题库
//!
//! 每门学科 10 道手写题目，正确答案都在第一个选项。
//! 不在题库中的学科（如 Economics）使用数学题库。

use super::types::{OptionLetter, Question};
use crate::services::Subject;

/// 题库中的一道题
pub struct BankQuestion {
    pub text: &'static str,
    pub options: [&'static str; 4],
    pub explanation: &'static str,
    pub follow_up: &'static str,
}

impl BankQuestion {
    /// 转换为带序号、学科的题目
    pub fn to_question(&self, id: u32, subject: &str) -> Question {
        Question {
            id,
            subject: subject.to_string(),
            text: self.text.to_string(),
            options: self.options.map(str::to_string),
            correct: OptionLetter::A,
            explanation: self.explanation.to_string(),
            follow_up: self.follow_up.to_string(),
        }
    }
}

const fn q(
    text: &'static str,
    options: [&'static str; 4],
    explanation: &'static str,
    follow_up: &'static str,
) -> BankQuestion {
    BankQuestion {
        text,
        options,
        explanation,
        follow_up,
    }
}

/// 按学科名取题库
pub fn bank_for(subject: &str) -> &'static [BankQuestion] {
    match Subject::from_name(subject) {
        Some(Subject::English) => &ENGLISH,
        Some(Subject::Physics) => &PHYSICS,
        Some(Subject::Chemistry) => &CHEMISTRY,
        Some(Subject::Biology) => &BIOLOGY,
        Some(Subject::Mathematics) | None => &MATHEMATICS,
    }
}

static MATHEMATICS: [BankQuestion; 10] = [
    q(
        "Solve for x: 2x + 5 = 15",
        ["x = 5", "x = 10", "x = 7", "x = 3"],
        "Subtract 5 from both sides: 2x = 10. Then divide by 2: x = 5.",
        "Can you solve 3x - 7 = 14?",
    ),
    q(
        "What is the value of 2³ + 3²?",
        ["17", "15", "13", "19"],
        "2³ = 8 and 3² = 9. So 8 + 9 = 17.",
        "What is the value of 4² - 2³?",
    ),
    q(
        "If a triangle has angles 50° and 60°, what is the third angle?",
        ["70°", "80°", "60°", "90°"],
        "The sum of angles in a triangle is 180°. So 180° - 50° - 60° = 70°.",
        "What type of triangle is this?",
    ),
    q(
        "Simplify: (3x + 2)(x - 1)",
        ["3x² - x - 2", "3x² + x - 2", "3x² - 3x - 2", "3x² + 2x - 2"],
        "Using FOIL: 3x² - 3x + 2x - 2 = 3x² - x - 2.",
        "Can you factorize x² - 5x + 6?",
    ),
    q(
        "What is 15% of 200?",
        ["30", "25", "35", "20"],
        "15% × 200 = 0.15 × 200 = 30.",
        "What is 200 increased by 15%?",
    ),
    q(
        "Find the LCM of 12 and 18",
        ["36", "72", "6", "24"],
        "12 = 2² × 3, 18 = 2 × 3². LCM = 2² × 3² = 36.",
        "What is the HCF of 12 and 18?",
    ),
    q(
        "If y = 2x + 3, what is y when x = 4?",
        ["11", "9", "14", "8"],
        "Substitute x = 4: y = 2(4) + 3 = 8 + 3 = 11.",
        "What is x when y = 15?",
    ),
    q(
        "What is the gradient of the line y = 3x - 7?",
        ["3", "-7", "7", "-3"],
        "In y = mx + c form, m is the gradient. Here m = 3.",
        "What is the y-intercept of this line?",
    ),
    q(
        "Calculate: √144 + √81",
        ["21", "15", "18", "25"],
        "√144 = 12 and √81 = 9. So 12 + 9 = 21.",
        "What is √(144 × 81)?",
    ),
    q(
        "A car travels 150km in 3 hours. What is its average speed?",
        ["50 km/h", "45 km/h", "55 km/h", "60 km/h"],
        "Speed = Distance ÷ Time = 150 ÷ 3 = 50 km/h.",
        "How long will it take to travel 200km at this speed?",
    ),
];

static ENGLISH: [BankQuestion; 10] = [
    q(
        "Choose the correct spelling:",
        ["Accommodation", "Accomodation", "Acomodation", "Acommodation"],
        "Accommodation has double 'c' and double 'm'.",
        "Can you use this word in a sentence?",
    ),
    q(
        "What is the past tense of 'begin'?",
        ["Began", "Begun", "Beginned", "Beginning"],
        "'Began' is the simple past tense. 'Begun' is the past participle.",
        "Use 'begun' correctly in a sentence.",
    ),
    q(
        "Identify the noun in: 'The quick brown fox jumps.'",
        ["Fox", "Quick", "Jumps", "Brown"],
        "'Fox' is the noun (naming word). 'Quick' and 'brown' are adjectives, 'jumps' is a verb.",
        "What type of noun is 'fox'?",
    ),
    q(
        "What is a synonym for 'happy'?",
        ["Joyful", "Sad", "Angry", "Tired"],
        "Joyful means feeling or expressing great happiness, similar to 'happy'.",
        "What is an antonym for 'happy'?",
    ),
    q(
        "Complete: 'Neither John ___ Mary was present.'",
        ["nor", "or", "and", "but"],
        "'Neither...nor' is the correct correlative conjunction pair.",
        "Use 'either...or' in a sentence.",
    ),
    q(
        "What figure of speech is: 'The wind whispered through the trees'?",
        ["Personification", "Simile", "Metaphor", "Hyperbole"],
        "Personification gives human qualities to non-human things. Wind cannot actually whisper.",
        "Give another example of personification.",
    ),
    q(
        "Choose the correct sentence:",
        ["She and I went to school.", "Me and her went to school.", "Her and I went to school.", "She and me went to school."],
        "Subject pronouns (She, I) are used as subjects of sentences.",
        "When do we use 'me' instead of 'I'?",
    ),
    q(
        "What type of sentence is: 'Close the door!'?",
        ["Imperative", "Declarative", "Interrogative", "Exclamatory"],
        "Imperative sentences give commands or make requests.",
        "Give an example of an interrogative sentence.",
    ),
    q(
        "'She writes well.' - 'Well' is what part of speech?",
        ["Adverb", "Adjective", "Noun", "Verb"],
        "'Well' modifies the verb 'writes', making it an adverb.",
        "What is the difference between 'good' and 'well'?",
    ),
    q(
        "What is the plural of 'analysis'?",
        ["Analyses", "Analysises", "Analysis", "Analysi"],
        "Words ending in '-is' from Greek origin change to '-es' in plural.",
        "What is the plural of 'crisis'?",
    ),
];

static PHYSICS: [BankQuestion; 10] = [
    q(
        "What is the SI unit of force?",
        ["Newton", "Joule", "Watt", "Pascal"],
        "Force is measured in Newtons (N). 1 N = 1 kg⋅m/s².",
        "What is the relationship between force, mass, and acceleration?",
    ),
    q(
        "Which law states F = ma?",
        ["Newton's Second Law", "Newton's First Law", "Newton's Third Law", "Law of Gravitation"],
        "Newton's Second Law of Motion states that Force equals mass times acceleration.",
        "If F = 20N and m = 4kg, what is the acceleration?",
    ),
    q(
        "What is the speed of light in vacuum?",
        ["3 × 10⁸ m/s", "3 × 10⁶ m/s", "3 × 10⁹ m/s", "3 × 10⁷ m/s"],
        "Light travels at approximately 300,000,000 m/s (3 × 10⁸ m/s) in vacuum.",
        "Why does light slow down in glass?",
    ),
    q(
        "What type of energy does a moving car have?",
        ["Kinetic energy", "Potential energy", "Chemical energy", "Nuclear energy"],
        "Kinetic energy is the energy of motion. KE = ½mv².",
        "What happens to KE if velocity doubles?",
    ),
    q(
        "What is the formula for pressure?",
        ["P = F/A", "P = F × A", "P = A/F", "P = F + A"],
        "Pressure equals Force divided by Area. Unit is Pascal (Pa) or N/m².",
        "Why do sharp knives cut better?",
    ),
    q(
        "Which electromagnetic wave has the longest wavelength?",
        ["Radio waves", "Gamma rays", "X-rays", "Ultraviolet"],
        "Radio waves have wavelengths from about 1mm to 100km, the longest in the EM spectrum.",
        "Which EM wave has the highest energy?",
    ),
    q(
        "What is Ohm's Law?",
        ["V = IR", "V = I/R", "V = I + R", "V = I - R"],
        "Voltage (V) equals Current (I) times Resistance (R).",
        "If V = 12V and R = 4Ω, what is I?",
    ),
    q(
        "What happens to resistance when temperature increases in metals?",
        ["Increases", "Decreases", "Stays the same", "Becomes zero"],
        "In metals, higher temperature means more atomic vibration, hindering electron flow.",
        "Why do semiconductors behave differently?",
    ),
    q(
        "What is the principle behind a hydraulic press?",
        ["Pascal's Principle", "Archimedes' Principle", "Bernoulli's Principle", "Newton's Law"],
        "Pascal's Principle: Pressure applied to enclosed fluid is transmitted equally in all directions.",
        "Give another application of this principle.",
    ),
    q(
        "What type of mirror is used in car headlights?",
        ["Concave mirror", "Convex mirror", "Plane mirror", "Parabolic only"],
        "Concave mirrors converge light to produce a powerful parallel beam.",
        "What type of mirror is used for rear-view?",
    ),
];

static CHEMISTRY: [BankQuestion; 10] = [
    q(
        "What is the atomic number of Carbon?",
        ["6", "12", "8", "14"],
        "Carbon has 6 protons in its nucleus, giving it atomic number 6.",
        "What is the mass number of Carbon-12?",
    ),
    q(
        "What type of bond is formed between Na and Cl in NaCl?",
        ["Ionic bond", "Covalent bond", "Metallic bond", "Hydrogen bond"],
        "Na donates an electron to Cl, forming Na⁺ and Cl⁻ ions held by electrostatic attraction.",
        "Why is NaCl soluble in water?",
    ),
    q(
        "What is the pH of a neutral solution?",
        ["7", "0", "14", "1"],
        "pH 7 is neutral. Below 7 is acidic, above 7 is basic/alkaline.",
        "What is the pH of lemon juice?",
    ),
    q(
        "What gas is produced when acid reacts with a carbonate?",
        ["Carbon dioxide", "Hydrogen", "Oxygen", "Nitrogen"],
        "Acid + Carbonate → Salt + Water + CO₂. The CO₂ causes effervescence.",
        "How do you test for CO₂ gas?",
    ),
    q(
        "What is the chemical formula for water?",
        ["H₂O", "HO₂", "H₂O₂", "OH"],
        "Water consists of 2 hydrogen atoms bonded to 1 oxygen atom.",
        "What is H₂O₂?",
    ),
    q(
        "Which group in the periodic table contains noble gases?",
        ["Group 18", "Group 1", "Group 17", "Group 2"],
        "Noble gases (He, Ne, Ar, Kr, Xe, Rn) are in Group 18 with full outer shells.",
        "Why are noble gases unreactive?",
    ),
    q(
        "What is the process of a solid changing directly to gas called?",
        ["Sublimation", "Evaporation", "Condensation", "Melting"],
        "Sublimation is solid → gas without passing through liquid state. Example: dry ice.",
        "What is the reverse process called?",
    ),
    q(
        "What is the valency of oxygen?",
        ["2", "1", "3", "4"],
        "Oxygen has 6 valence electrons and needs 2 more to complete its octet, so valency is 2.",
        "What is the valency of nitrogen?",
    ),
    q(
        "What catalyst is used in the Haber process?",
        ["Iron", "Platinum", "Nickel", "Copper"],
        "Iron catalyst is used to produce ammonia: N₂ + 3H₂ ⇌ 2NH₃.",
        "What conditions favor ammonia production?",
    ),
    q(
        "Which element is the most electronegative?",
        ["Fluorine", "Oxygen", "Chlorine", "Nitrogen"],
        "Fluorine has the highest electronegativity (3.98) on the Pauling scale.",
        "What is electronegativity?",
    ),
];

static BIOLOGY: [BankQuestion; 10] = [
    q(
        "What organelle is known as the 'powerhouse of the cell'?",
        ["Mitochondria", "Nucleus", "Ribosome", "Chloroplast"],
        "Mitochondria produce ATP through cellular respiration, providing energy for the cell.",
        "What process occurs in mitochondria?",
    ),
    q(
        "What is the basic unit of life?",
        ["Cell", "Tissue", "Organ", "Organism"],
        "The cell is the smallest structural and functional unit of all living organisms.",
        "What are the two main types of cells?",
    ),
    q(
        "What is the process by which plants make their food?",
        ["Photosynthesis", "Respiration", "Digestion", "Excretion"],
        "Photosynthesis: 6CO₂ + 6H₂O + light → C₆H₁₂O₆ + 6O₂.",
        "Where does photosynthesis occur in the plant?",
    ),
    q(
        "What carries genetic information in cells?",
        ["DNA", "RNA only", "Proteins", "Carbohydrates"],
        "DNA (Deoxyribonucleic Acid) contains the genetic instructions for all living organisms.",
        "What is the shape of DNA?",
    ),
    q(
        "What blood type is the universal donor?",
        ["O negative", "AB positive", "A positive", "B negative"],
        "O negative has no A, B antigens or Rh factor, so it won't cause immune reactions.",
        "What blood type is the universal recipient?",
    ),
    q(
        "What is the function of white blood cells?",
        ["Fight infections", "Carry oxygen", "Clot blood", "Transport nutrients"],
        "White blood cells (leukocytes) are part of the immune system and fight pathogens.",
        "Name two types of white blood cells.",
    ),
    q(
        "What is the largest organ in the human body?",
        ["Skin", "Liver", "Heart", "Brain"],
        "The skin covers about 2 square meters and weighs about 3.6 kg in adults.",
        "What are the three layers of skin?",
    ),
    q(
        "Which vitamin is produced when skin is exposed to sunlight?",
        ["Vitamin D", "Vitamin C", "Vitamin A", "Vitamin B"],
        "UV-B rays convert 7-dehydrocholesterol in skin to Vitamin D3.",
        "What is the function of Vitamin D?",
    ),
    q(
        "What is the process of cell division for growth called?",
        ["Mitosis", "Meiosis", "Binary fission", "Budding"],
        "Mitosis produces two identical daughter cells for growth and repair.",
        "How many chromosomes do human cells have?",
    ),
    q(
        "What part of the brain controls balance?",
        ["Cerebellum", "Cerebrum", "Medulla", "Hypothalamus"],
        "The cerebellum coordinates voluntary movements and maintains balance and posture.",
        "What does the medulla control?",
    ),
];
