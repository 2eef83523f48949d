//! 연습용 영업 반론 시나리오 원본 데이터

/// (id, category, objection, context, suggested_response)
pub(super) type ScenarioRow = (u32, &'static str, &'static str, &'static str, &'static str);

const PRICING: &str = "Pricing & Commission Objections";
const COMPETITION: &str = "Competition & Loyalty Objections";
const TRUST: &str = "Trust & Reliability Objections";
const VALUE: &str = "Value & ROI Objections";
const PROCRASTINATION: &str = "Procrastination & Time-Related Objections";
const TECHNICAL: &str = "Technical & Implementation Objections";
const NEED: &str = "Need & Relevance Objections";
const MISC: &str = "Miscellaneous & Specific Scenarios";

pub(super) const SCENARIO_ROWS: [ScenarioRow; 60] = [
    (
        1,
        PRICING,
        "Your commission is too high.",
        "The merchant is comparing your fee structure to a competitor or their current margins.",
        "Reframe as an investment, not a cost. Show value vs. price.",
    ),
    (
        2,
        PRICING,
        "Bahut mehenga hai, itna budget nahi hai mera.",
        "A small business owner is concerned about upfront costs or monthly fees.",
        "Offer a trial period, a smaller starter package, or break down the cost per day/week.",
    ),
    (
        3,
        PRICING,
        "Is there any discount? Can you give me a better price?",
        "The merchant is trying to negotiate for a lower rate.",
        "Explain the value included. Hold firm but offer a non-monetary value-add (e.g., extra support).",
    ),
    (
        4,
        PRICING,
        "The other company is offering a 5% lower commission.",
        "Direct comparison with a known competitor's pricing.",
        "Differentiate on features, service, and reliability, not just price. \"Cheaper isn't always better.\"",
    ),
    (
        5,
        PRICING,
        "Are there any hidden charges I should know about?",
        "The merchant is skeptical about the pricing transparency.",
        "Be upfront. Show a clear pricing table. Build trust by highlighting what's included.",
    ),
    (
        6,
        PRICING,
        "Itna paisa lagane ke baad, sales nahi badhi toh?",
        "The merchant is worried about the return on their investment.",
        "Share case studies, testimonials, or offer a performance-based incentive if possible.",
    ),
    (
        7,
        PRICING,
        "GST include karke final price batao.",
        "The merchant wants the all-inclusive final cost to avoid surprises.",
        "Provide a clear, final quote immediately to demonstrate transparency.",
    ),
    (
        8,
        PRICING,
        "Payment terms flexible hain? Can I pay in installments?",
        "A merchant with cash flow concerns is asking for flexible payment options.",
        "Explain the available payment plans. Show empathy for their cash flow needs.",
    ),
    (
        9,
        COMPETITION,
        "I'm already working with [Competitor Name] and I'm happy.",
        "The merchant is satisfied with their current provider and sees no reason to switch.",
        "Acknowledge and respect the relationship. Ask \"What if we could improve X by 10%?\" Spark curiosity.",
    ),
    (
        10,
        COMPETITION,
        "Mera purana vendor hai, usse aacha relation hai.",
        "The objection is based on a long-standing personal relationship, not business logic.",
        "Don't attack the relationship. Suggest a small, parallel trial. \"No need to switch, just try us.\"",
    ),
    (
        11,
        COMPETITION,
        "Everyone in the market uses their platform, why should I use yours?",
        "The competitor has a dominant market share.",
        "Focus on your unique selling proposition (USP). Highlight your niche, better service, or specific feature.",
    ),
    (
        12,
        COMPETITION,
        "I tried a similar service before and it didn't work for me.",
        "The merchant had a bad experience with a different provider in the same category.",
        "Differentiate your service clearly. \"I understand, here's how we are different and avoid that problem...\"",
    ),
    (
        13,
        COMPETITION,
        "Suna hai [Competitor Name] ka customer support bahut accha hai.",
        "The merchant is comparing perceived service quality.",
        "Showcase your support strength. Provide testimonials, mention dedicated account managers, or SLAs.",
    ),
    (
        14,
        COMPETITION,
        "Just leave your brochure, I'll compare and get back to you.",
        "A polite way of dismissing the salesperson to compare with others later.",
        "Secure a follow-up meeting. \"Of course, can we schedule 10 minutes next Tuesday to review it together?\"",
    ),
    (
        15,
        COMPETITION,
        "They are a big, well-known brand. Are you new?",
        "The merchant trusts established brands more than a newer company.",
        "Highlight your agility, modern tech, and personalized service. Frame \"new\" as \"more advanced\".",
    ),
    (
        16,
        TRUST,
        "How can I trust that your system won't fail during peak hours?",
        "The merchant is concerned about technical reliability and potential business loss.",
        "Discuss uptime statistics, server infrastructure, and fail-safes. Offer a Service Level Agreement (SLA).",
    ),
    (
        17,
        TRUST,
        "Aapki company kab tak tikegi? What if you shut down?",
        "A startup or new company facing skepticism about its long-term stability.",
        "Talk about your funding, vision, and the team's experience. Show long-term commitment.",
    ),
    (
        18,
        TRUST,
        "I need to see a live demo with my own products.",
        "The merchant wants proof that the system works as promised, not just a generic presentation.",
        "\"Great idea.\" Be prepared to offer a customized or sandboxed demo.",
    ),
    (
        19,
        TRUST,
        "Do you have any clients in my area? Can I speak to them?",
        "The merchant is looking for social proof and local references.",
        "\"Absolutely.\" Provide references of happy, non-competing clients.",
    ),
    (
        20,
        TRUST,
        "Your marketing promises sound too good to be true.",
        "The merchant is cynical about the marketing claims being made.",
        "Back up every claim with data, a case study, or a logical explanation. Tone down the hype.",
    ),
    (
        21,
        TRUST,
        "Mera data safe rahega? What about data security?",
        "A critical concern for any business adopting a digital platform.",
        "Explain your security protocols, data encryption, and privacy policies in simple terms.",
    ),
    (
        22,
        TRUST,
        "Pehle bhi log aaye the, promise karke service nahi di.",
        "The merchant is jaded from past negative experiences with other salespeople.",
        "Acknowledge their frustration. Differentiate with a clear, documented onboarding and support plan.",
    ),
    (
        23,
        VALUE,
        "I don't think I'll get enough return on this investment.",
        "The merchant is unable to see the tangible financial benefits.",
        "Use an ROI calculator. Show a clear, conservative projection of increased revenue or cost savings.",
    ),
    (
        24,
        VALUE,
        "My business is very small, I don't need all these features.",
        "The merchant feels the product is too complex or powerful for their needs.",
        "Focus on the 1-2 key features that will have the biggest impact on their specific business.",
    ),
    (
        25,
        VALUE,
        "Isse mera fayda kya hoga, seedhe seedhe batao.",
        "The merchant wants a no-nonsense, bottom-line value proposition.",
        "Give a clear, concise \"what's in it for you\" statement. \"You get more customers and save 5 hours a week.\"",
    ),
    (
        26,
        VALUE,
        "We are doing fine without it, why do we need this?",
        "The business is profitable and the merchant doesn't feel any urgent pain point.",
        "Introduce the concept of \"opportunity cost.\" \"You're doing well, but you could be doing great.\"",
    ),
    (
        27,
        VALUE,
        "This seems like a 'nice to have', not a 'must have'.",
        "The merchant doesn't see the product as essential for their operations.",
        "Connect your product to a core business goal (e.g., \"This isn't about fancy tech, it's about reducing customer wait times\").",
    ),
    (
        28,
        VALUE,
        "Free mein jo mil raha hai, uske liye main pay kyun karoon?",
        "The merchant is comparing your paid service with a free alternative.",
        "Clearly articulate the limitations of the free tool and the premium benefits of yours (support, features, reliability).",
    ),
    (
        29,
        VALUE,
        "How long will it take to see results?",
        "The merchant is concerned about the time it takes to realize the value.",
        "Set realistic expectations. Provide a typical timeline based on other clients. \"Usually, clients see X in 30-60 days.\"",
    ),
    (
        30,
        PROCRASTINATION,
        "I don't have time for this right now.",
        "A very common brush-off when the merchant is busy.",
        "Respect their time. \"I understand. What's a better time in the next 2 days for a 15-min call?\"",
    ),
    (
        31,
        PROCRASTINATION,
        "Send me an email with the details.",
        "Often a polite way to end the conversation without committing.",
        "\"I will, right away. Can we also book a 10-min slot for tomorrow to discuss any questions you might have?\"",
    ),
    (
        32,
        PROCRASTINATION,
        "I need to discuss this with my partner/manager.",
        "The decision-maker is not in the room or is deferring the decision.",
        "\"That makes sense. When are you meeting with them? I can provide a summary sheet to help your discussion.\"",
    ),
    (
        33,
        PROCRASTINATION,
        "Abhi season ka time hai, baad mein dekhte hain.",
        "The merchant is too overwhelmed with current business to consider new things.",
        "Frame it as a way to manage the peak season better. \"This could actually help you handle the rush more efficiently.\"",
    ),
    (
        34,
        PROCRASTINATION,
        "Call me back next quarter.",
        "The merchant is pushing the decision far into the future.",
        "Create a sense of urgency. Mention a limited-time offer or a new feature release.",
    ),
    (
        35,
        PROCRASTINATION,
        "We are planning a renovation, so we'll decide after that.",
        "The merchant has other major projects taking priority.",
        "Acknowledge their priority. Ask for permission to follow up on a specific date post-renovation.",
    ),
    (
        36,
        PROCRASTINATION,
        "Let me think about it.",
        "A vague stall that often means \"no.\"",
        "Try to uncover the real objection. \"When people say that, they usually have a concern about either price or implementation. Which one is it for you?\"",
    ),
    (
        37,
        TECHNICAL,
        "This seems too complicated. My staff won't be able to use it.",
        "The merchant is worried about the learning curve for their non-technical employees.",
        "Emphasize ease of use. \"It's as simple as using WhatsApp.\" Offer free, on-site training.",
    ),
    (
        38,
        TECHNICAL,
        "Mere paas iske liye proper computer/internet nahi hai.",
        "The merchant lacks the necessary infrastructure.",
        "Clarify the minimum requirements. Suggest lightweight/mobile-first versions if available.",
    ),
    (
        39,
        TECHNICAL,
        "How long will the setup and installation take?",
        "The merchant is concerned about business disruption during the implementation phase.",
        "Provide a clear, step-by-step timeline. \"The setup is less than 30 minutes and can be done after hours.\"",
    ),
    (
        40,
        TECHNICAL,
        "Will this integrate with my existing billing software?",
        "The merchant wants to ensure the new system works with their current tools.",
        "Be honest about integration capabilities. Highlight existing integrations or API options.",
    ),
    (
        41,
        TECHNICAL,
        "After-sales service kon dega? Who will provide support if something goes wrong?",
        "The merchant is worried about getting help after the initial purchase.",
        "Explain your support channels (phone, chat, ticket), hours of operation, and typical response times.",
    ),
    (
        42,
        TECHNICAL,
        "Mujhe technology samajh nahi aati.",
        "The merchant is intimidated by the technical aspect of the product.",
        "Reassure them. Use analogies. \"Don't worry, we handle all the technical parts. You just focus on your business.\"",
    ),
    (
        43,
        TECHNICAL,
        "Yeh mobile pe aache se chalega?",
        "The merchant primarily operates their business using a smartphone.",
        "Showcase the mobile app or responsive mobile website. Confirm its full functionality.",
    ),
    (
        44,
        TECHNICAL,
        "Software update ka kya? Will there be extra charges?",
        "The merchant is concerned about future costs for maintenance and updates.",
        "Clarify that updates are included in the subscription/price. Frame it as a benefit.",
    ),
    (
        45,
        NEED,
        "My business is different, this won't work for me.",
        "The merchant believes their business is too unique for a standardized solution.",
        "Use case studies from similar, niche businesses. \"We work with another bakery just like yours, and they saw...\"",
    ),
    (
        46,
        NEED,
        "Mere customers online nahi hain.",
        "A traditional business owner who doesn't believe their clientele is digitally savvy.",
        "Share local stats on internet and smartphone usage. Even if they aren't online, you can improve efficiency.",
    ),
    (
        47,
        NEED,
        "I don't have a problem with my current process.",
        "The merchant is unaware of the inefficiencies in their existing workflow.",
        "Ask discovery questions to uncover hidden pain points. \"How much time do you spend on manual inventory checks?\"",
    ),
    (
        48,
        NEED,
        "This is only for big restaurants/shops, not for my small cafe.",
        "The merchant perceives the product as an enterprise solution.",
        "Highlight features specifically for small businesses. Offer a SMB-specific pricing tier.",
    ),
    (
        49,
        NEED,
        "We get most of our business from word-of-mouth.",
        "The merchant relies on traditional marketing and doesn't see the need for a new platform.",
        "Frame your tool as a way to amplify word-of-mouth and manage their reputation online.",
    ),
    (
        50,
        NEED,
        "Is this just another app that I have to manage?",
        "The merchant is feeling overwhelmed by \"app fatigue.\"",
        "Position it as a tool that consolidates or simplifies tasks, reducing the need for other apps.",
    ),
    (
        51,
        NEED,
        "Mera walk-in customer base aacha hai, I don't need more.",
        "The merchant is content with their current footfall and lacks ambition to grow.",
        "Talk about future-proofing the business and creating a more resilient revenue stream.",
    ),
    (
        52,
        NEED,
        "What is the point of this? Main jaise kar raha hoon theek hai.",
        "A fundamental lack of understanding of the product's core purpose.",
        "Go back to basics. Use a simple analogy to explain the core problem you solve.",
    ),
    (
        53,
        MISC,
        "The decision is up to my son, he handles all the tech.",
        "The salesperson is talking to a non-decision-maker.",
        "\"Great, when can the three of us connect for a brief call? I'd love to show him the demo.\"",
    ),
    (
        54,
        MISC,
        "I'll do it, but only if you give me exclusivity in my area.",
        "The merchant is asking for a special deal that may not be feasible.",
        "Explain the business model and why exclusivity isn't possible, but offer other forms of partnership.",
    ),
    (
        55,
        MISC,
        "I read a bad review about your company online.",
        "The merchant has seen negative feedback and is concerned.",
        "Acknowledge it, don't be defensive. \"Thank you for bringing that up. It was an issue we have since resolved by doing X.\"",
    ),
    (
        56,
        MISC,
        "Your salesperson last year promised me something you didn't deliver.",
        "A past negative experience with your own company.",
        "Apologize sincerely. Rebuild trust. Explain what has changed in the company since then.",
    ),
    (
        57,
        MISC,
        "Sab kuch theek hai, par I need it in Gujarati/Kannada/Tamil.",
        "A specific language requirement that may or may not be supported.",
        "Be clear about your current language support and your roadmap for adding new languages.",
    ),
    (
        58,
        MISC,
        "The contract is too long, I don't want to be locked in.",
        "The merchant is hesitant to commit to a long-term agreement.",
        "Offer a quarterly or semi-annual plan, even if it's at a slightly higher price point.",
    ),
    (
        59,
        MISC,
        "Okay, let's start with a free trial.",
        "The merchant wants to try before buying, which may or may not be your standard policy.",
        "If you offer trials, agree immediately. If not, explain why and offer a detailed, live demo instead.",
    ),
    (
        60,
        MISC,
        "The person who came before you was very pushy.",
        "The merchant is reacting to a previous salesperson's aggressive style.",
        "Set a collaborative tone. \"I'm not here to push you. My goal is just to see if there's a fit. If not, that's okay.\"",
    ),
];
