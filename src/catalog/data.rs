//! Reference tables. Declaration order is listing order.

use super::{Food, Section};

pub(super) static FOODS: &[Section<Food>] = &[
    Section {
        name: "Proteins & Meats",
        items: &[
            ("Chicken Breast", Food { calories: 165.0, protein: 31.0, fat: 3.6, vitamins: &["B6", "Niacin"] }),
            ("Turkey Breast", Food { calories: 135.0, protein: 29.0, fat: 1.0, vitamins: &["B6", "Niacin"] }),
            ("Salmon", Food { calories: 208.0, protein: 22.0, fat: 13.0, vitamins: &["Omega-3", "B12"] }),
            ("Tuna", Food { calories: 132.0, protein: 29.0, fat: 0.6, vitamins: &["Omega-3", "B12"] }),
            ("Eggs", Food { calories: 68.0, protein: 6.0, fat: 5.0, vitamins: &["B12", "Choline"] }),
        ],
    },
    Section {
        name: "Vegetables",
        items: &[
            ("Spinach", Food { calories: 23.0, protein: 2.9, fat: 0.4, vitamins: &["Iron", "Vitamin K"] }),
            ("Kale", Food { calories: 49.0, protein: 4.3, fat: 0.9, vitamins: &["Vitamin A", "Vitamin C"] }),
            ("Broccoli", Food { calories: 55.0, protein: 4.3, fat: 0.6, vitamins: &["Vitamin C", "Fiber"] }),
            ("Carrots", Food { calories: 41.0, protein: 0.9, fat: 0.2, vitamins: &["Vitamin A"] }),
            ("Sweet Potatoes", Food { calories: 86.0, protein: 2.0, fat: 0.1, vitamins: &["Vitamin A"] }),
        ],
    },
    Section {
        name: "Fruits",
        items: &[
            ("Apples", Food { calories: 52.0, protein: 0.3, fat: 0.2, vitamins: &["Vitamin C", "Fiber"] }),
            ("Bananas", Food { calories: 89.0, protein: 1.1, fat: 0.3, vitamins: &["Potassium"] }),
            ("Oranges", Food { calories: 47.0, protein: 0.9, fat: 0.1, vitamins: &["Vitamin C"] }),
            ("Blueberries", Food { calories: 57.0, protein: 0.7, fat: 0.3, vitamins: &["Antioxidants"] }),
            ("Strawberries", Food { calories: 32.0, protein: 0.7, fat: 0.3, vitamins: &["Vitamin C"] }),
        ],
    },
    Section {
        name: "Nuts & Seeds",
        items: &[
            ("Almonds", Food { calories: 579.0, protein: 21.0, fat: 50.0, vitamins: &["Vitamin E"] }),
            ("Walnuts", Food { calories: 654.0, protein: 15.0, fat: 65.0, vitamins: &["Omega-3"] }),
            ("Cashews", Food { calories: 553.0, protein: 18.0, fat: 44.0, vitamins: &["Magnesium"] }),
            ("Chia Seeds", Food { calories: 486.0, protein: 16.0, fat: 31.0, vitamins: &["Omega-3"] }),
            ("Pumpkin Seeds", Food { calories: 559.0, protein: 30.0, fat: 49.0, vitamins: &["Iron"] }),
        ],
    },
    Section {
        name: "Seafood",
        items: &[
            ("Mackerel", Food { calories: 205.0, protein: 19.0, fat: 13.0, vitamins: &["Omega-3"] }),
            ("Sardines", Food { calories: 208.0, protein: 25.0, fat: 11.0, vitamins: &["Calcium"] }),
            ("Trout", Food { calories: 168.0, protein: 22.0, fat: 10.0, vitamins: &["Omega-3"] }),
            ("Oysters", Food { calories: 81.0, protein: 9.0, fat: 2.0, vitamins: &["Zinc"] }),
            ("Crab", Food { calories: 97.0, protein: 20.0, fat: 1.5, vitamins: &["B12"] }),
        ],
    },
    Section {
        name: "Whole Grains & Legumes",
        items: &[
            ("Brown Rice", Food { calories: 111.0, protein: 2.6, fat: 0.9, vitamins: &["Fiber"] }),
            ("Quinoa", Food { calories: 120.0, protein: 4.1, fat: 1.9, vitamins: &["Magnesium"] }),
            ("Oats", Food { calories: 389.0, protein: 17.0, fat: 7.0, vitamins: &["Fiber"] }),
            ("Lentils", Food { calories: 116.0, protein: 9.0, fat: 0.4, vitamins: &["Iron"] }),
            ("Chickpeas", Food { calories: 164.0, protein: 9.0, fat: 2.6, vitamins: &["Folate"] }),
        ],
    },
    Section {
        name: "Dairy & Alternatives",
        items: &[
            ("Greek Yogurt", Food { calories: 97.0, protein: 10.0, fat: 5.0, vitamins: &["Probiotics"] }),
            ("Cottage Cheese", Food { calories: 98.0, protein: 11.0, fat: 4.0, vitamins: &["Calcium"] }),
            ("Cheddar Cheese", Food { calories: 403.0, protein: 25.0, fat: 33.0, vitamins: &["Calcium"] }),
            ("Milk", Food { calories: 42.0, protein: 3.4, fat: 1.0, vitamins: &["Calcium"] }),
            ("Tofu", Food { calories: 144.0, protein: 15.0, fat: 9.0, vitamins: &["Iron"] }),
        ],
    },
    Section {
        name: "Superfoods & Miscellaneous",
        items: &[
            ("Dark Chocolate", Food { calories: 546.0, protein: 7.9, fat: 31.0, vitamins: &["Iron"] }),
            ("Coconut", Food { calories: 354.0, protein: 3.3, fat: 33.0, vitamins: &["Manganese"] }),
            ("Kimchi", Food { calories: 15.0, protein: 1.0, fat: 0.5, vitamins: &["Probiotics"] }),
            ("Miso", Food { calories: 199.0, protein: 12.0, fat: 6.0, vitamins: &["Probiotics"] }),
            ("Seaweed", Food { calories: 45.0, protein: 5.0, fat: 1.0, vitamins: &["Iodine"] }),
        ],
    },
];

pub(super) static JUICES: &[Section<&str>] = &[
    Section {
        name: "Muscle Recovery & Growth",
        items: &[
            ("Banana Almond Protein Shake", "Rich in protein, almond milk and banana combine to promote muscle recovery and growth."),
            ("Chocolate Peanut Butter Smoothie", "A tasty, protein-packed drink with antioxidants from cocoa and healthy fats from peanut butter."),
            ("Spinach Avocado Protein Juice", "Loaded with amino acids and vitamins, this juice supports muscle regeneration and overall health."),
            ("Greek Yogurt Blueberry Smoothie", "Packed with protein and antioxidants, this smoothie aids in muscle repair and reduces inflammation."),
            ("Mango Coconut Protein Shake", "A tropical, nutrient-dense shake that blends mango and coconut for post-workout replenishment."),
            ("Pineapple Ginger Recovery Juice", "An anti-inflammatory juice that helps soothe muscles and speed up recovery."),
            ("Beetroot Carrot Juice", "Rich in nitrates, this juice boosts muscle oxygenation and supports recovery."),
            ("Watermelon Basil Juice", "Provides hydration and amino acids for muscle repair and post-exercise recovery."),
            ("Papaya Honey Smoothie", "A blend that supports digestion and provides nutrients for muscle growth."),
            ("Turmeric Golden Milk Shake", "Infused with turmeric's anti-inflammatory properties to soothe post-workout soreness."),
        ],
    },
    Section {
        name: "Fat Burning & Metabolism Boosting",
        items: &[
            ("Green Apple Celery Juice", "A refreshing blend that’s low in calories and high in antioxidants to support fat burning."),
            ("Grapefruit Fat Burner Juice", "Packed with vitamin C and enzymes that boost metabolism and support weight loss."),
            ("Lemon Ginger Detox Juice", "A tangy and spicy combo that revs up your metabolism while aiding digestion."),
            ("Apple Cider Vinegar Drink", "Famous for its fat-burning properties and ability to regulate blood sugar levels."),
            ("Cucumber Mint Fat Cutter", "Cucumber keeps you hydrated while mint stimulates digestion and fat metabolism."),
            ("Carrot Beet Metabolism Booster", "A nutrient-rich juice that improves metabolic rate and supports fat loss."),
            ("Orange Cinnamon Juice", "A metabolism-enhancing juice with antioxidants and a burst of flavor."),
            ("Pineapple Chia Fat-Burner", "Chia seeds add fiber and omega-3s while pineapple promotes fat loss."),
            ("Matcha Green Tea Smoothie", "A metabolism-boosting drink rich in antioxidants and energy-boosting matcha."),
            ("Spinach Lemon Green Juice", "Low-calorie juice loaded with iron and vitamin C to enhance fat burning."),
        ],
    },
    Section {
        name: "Energy & Endurance Boosting",
        items: &[
            ("Banana Date Energy Smoothie", "Rich in natural sugars and potassium, this smoothie is perfect for a pre-workout energy boost."),
            ("Sweet Potato Cinnamon Smoothie", "A nutrient-packed blend providing long-lasting energy and vitamins for endurance."),
            ("Pomegranate Power Juice", "Full of antioxidants, this juice aids in improving stamina and cardiovascular health."),
            ("Coconut Water Electrolyte Drink", "An all-natural drink filled with electrolytes to keep you hydrated and energized."),
            ("Grape Honey Energy Juice", "A sweet treat combining natural sugars from grapes and honey to keep your energy levels high."),
            ("Acai Berry Power Blend", "Rich in antioxidants and natural sugars, it provides a quick energy boost."),
            ("Watermelon Coconut Juice", "Packed with electrolytes and hydration to support endurance workouts."),
            ("Cherry Lemonade Energy Drink", "Loaded with vitamin C and natural sugars to sustain energy levels."),
            ("Pineapple Papaya Juice", "A tropical juice with a mix of nutrients to fuel your workouts."),
            ("Guava Strawberry Energizer", "High in vitamins and minerals, this juice boosts energy and keeps you refreshed."),
        ],
    },
    Section {
        name: "Hydration & Detoxification",
        items: &[
            ("Cucumber Aloe Hydration Juice", "A cooling juice that hydrates deeply while supporting detoxification."),
            ("Lemon Cucumber Mint Detox Water", "A classic blend that flushes toxins and keeps you hydrated."),
            ("Watermelon Coconut Hydrator", "Combines watermelon and coconut water for a powerful hydrating drink."),
            ("Chia Seed Lime Drink", "Packed with fiber and hydration, this drink aids in flushing out toxins."),
            ("Kiwi Cucumber Cooler", "A refreshing and vitamin-rich juice that hydrates and detoxifies."),
            ("Aloe Vera Honey Detox Drink", "A sweet and soothing drink that promotes digestion and detoxification."),
            ("Orange Basil Infused Water", "A flavorful detox drink combining citrus and herbs for a refreshing touch."),
            ("Celery Lemon Hydration Juice", "A hydrating juice rich in electrolytes and vitamins."),
            ("Blueberry Coconut Detox Drink", "A delicious antioxidant-rich drink to cleanse your system."),
            ("Green Tea Lemon Detox Smoothie", "A metabolism-boosting smoothie with detoxifying green tea."),
        ],
    },
    Section {
        name: "Immunity & Overall Health",
        items: &[
            ("Carrot Ginger Turmeric Juice", "Packed with immunity-boosting ingredients to fight inflammation."),
            ("Spinach Kale Super Juice", "A superfood-rich juice that boosts immunity and overall wellness."),
            ("Citrus Honey Ginger Elixir", "A vitamin C-rich elixir to keep your immune system strong."),
            ("Pineapple Orange Vitamin C Boost", "A tangy drink loaded with vitamin C to support immunity."),
            ("Mixed Berry Antioxidant Juice", "A blend of berries high in antioxidants to promote health."),
            ("Mango Carrot Vitamin A Juice", "Rich in vitamin A and other nutrients to enhance immune function."),
            ("Apple Cinnamon Immunity Shot", "A quick shot of nutrients and anti-inflammatory properties."),
            ("Strawberry Kiwi Vitamin C Drink", "A sweet and tangy drink filled with immune-boosting vitamins."),
            ("Broccoli Spinach Health Juice", "A nutrient-packed juice for overall health and immunity."),
            ("Ginger Lemon Wellness Shot", "A quick and potent drink to fight inflammation and boost immunity."),
        ],
    },
];

pub(super) static EQUIPMENT: &[Section<&str>] = &[
    Section {
        name: "Strength Training Equipment (Weights & Machines)",
        items: &[
            ("Dumbbells", "2 - 50 kg (based on strength level)"),
            ("Barbells", "10 - 20 kg (without plates)"),
            ("Weight Plates", "2.5 - 25 kg per plate"),
            ("Kettlebells", "4 - 40 kg"),
            ("Resistance Bands", "Light, Medium, Heavy, Extra Heavy"),
            ("Smith Machine", "20 - 60 kg bar & additional plates"),
            ("Cable Machine", "5 - 90 kg weight stack"),
            ("Leg Press Machine", "40 - 300 kg (adjustable)"),
            ("Chest Press Machine", "10 - 80 kg weight stack"),
            ("Shoulder Press Machine", "10 - 70 kg"),
        ],
    },
    Section {
        name: "Bodyweight & Functional Training Equipment",
        items: &[
            ("Pull-up Bar", "Bodyweight"),
            ("Parallel Dip Bars", "Bodyweight"),
            ("Power Rack", "Adjustable (holds up to 200+ kg)"),
            ("TRX Suspension Trainer", "NA"),
            ("Gymnastic Rings", "NA"),
            ("Plyometric Box", "30cm, 45cm, 60cm heights"),
            ("Medicine Ball", "2 - 15 kg"),
            ("Battle Ropes", "9 - 15 meters long"),
            ("Ab Roller", "NA"),
            ("Jump Rope", "Adjustable Length"),
        ],
    },
    Section {
        name: "Cardio Equipment",
        items: &[
            ("Treadmill", "User Weight: Up to 180 kg"),
            ("Stationary Bike", "Adjustable resistance"),
            ("Rowing Machine", "Adjustable resistance"),
            ("Stair Climber", "NA"),
            ("Elliptical Trainer", "NA"),
            ("Assault Bike", "NA"),
            ("Ski Erg", "NA"),
            ("Air Rower", "NA"),
            ("Battle Ropes", "9 - 15 meters"),
            ("Speed Ladder", "NA"),
        ],
    },
    Section {
        name: "Leg & Core Strength Equipment",
        items: &[
            ("Squat Rack", "Supports up to 300+ kg"),
            ("Calf Raise Machine", "10 - 80 kg"),
            ("Glute Ham Developer", "NA"),
            ("Leg Curl Machine", "10 - 100 kg"),
            ("Hack Squat Machine", "40 - 300 kg"),
            ("Hip Thrust Machine", "20 - 200 kg"),
            ("Seated Ab Crunch Machine", "10 - 80 kg"),
            ("Roman Chair", "NA"),
            ("Stability Ball", "55cm - 75cm"),
            ("Weighted Vest", "5 - 20 kg"),
        ],
    },
    Section {
        name: "Recovery & Mobility Equipment",
        items: &[
            ("Foam Roller", "NA"),
            ("Massage Gun", "NA"),
            ("Resistance Bands", "Light - Heavy"),
            ("Yoga Mat", "NA"),
            ("Balance Board", "NA"),
            ("Hand Grippers", "10 - 100 kg"),
            ("Wrist/Ankle Weights", "0.5 - 5 kg"),
            ("Stretching Strap", "NA"),
            ("Infrared Sauna", "NA"),
            ("Ice Bath Tub", "NA"),
        ],
    },
];

pub(super) static AGE_GUIDE: &[(&str, &str)] = &[
    ("Kids (10-14)", "Bodyweight exercises only"),
    ("Teens (15-18)", "Light dumbbells (2-10kg), resistance bands"),
    ("Beginners (19-30)", "Dumbbells (5-15kg), barbell (20-40kg)"),
    ("Intermediate (30-50)", "Dumbbells (15-30kg), barbell (40-80kg)"),
    ("Advanced (50+)", "Adjust weights based on endurance & recovery"),
];

pub(super) static WORKOUTS: &[(&str, &[&str])] = &[
    (
        "Cardio",
        &["Running", "Jump Rope", "Cycling", "Rowing", "Stair Climbing"],
    ),
    (
        "Strength Training",
        &["Bench Press", "Deadlifts", "Bicep Curls", "Shoulder Press", "Squats"],
    ),
    (
        "Leg Workouts",
        &["Lunges", "Leg Press", "Calf Raises", "Step-Ups", "Bulgarian Split Squats"],
    ),
    (
        "Full-Body Workouts",
        &["Burpees", "Kettlebell Swings", "Mountain Climbers", "Clean and Press", "Medicine Ball Slams"],
    ),
    (
        "Yoga Workouts",
        &["Downward Dog", "Warrior Pose", "Tree Pose", "Cobra Pose", "Child’s Pose"],
    ),
    (
        "Pilates Workouts",
        &["Leg Circles", "Hundred", "Rolling Like a Ball", "Single-Leg Stretch", "Teaser"],
    ),
    (
        "Core & Abs Workouts",
        &["Planks", "Russian Twists", "Bicycle Crunches", "Hanging Leg Raises", "Ab Rollouts"],
    ),
    (
        "HIIT",
        &["Sprint Intervals", "Jump Squats", "Battle Ropes", "Box Jumps", "Kettlebell Snatches"],
    ),
    (
        "Stretching & Mobility Workouts",
        &["Static Stretching", "Dynamic Stretching", "Foam Rolling", "Hip Openers", "Shoulder Mobility Drills"],
    ),
    (
        "CrossFit Workouts",
        &["Wall Balls", "Power Cleans", "Box Step-Ups", "Rope Climbs", "Thrusters"],
    ),
    (
        "Calisthenics",
        &["Pull-Ups", "Muscle-Ups", "Dips", "L-Sits", "Pistol Squats"],
    ),
    (
        "Powerlifting",
        &["Back Squat", "Deadlift", "Bench Press", "Overhead Press", "Snatch"],
    ),
    (
        "Functional Fitness",
        &["Farmer’s Walk", "Sled Push", "Medicine Ball Throws", "Sandbag Carries", "Battle Rope Slams"],
    ),
    (
        "Bodyweight Workouts",
        &["Push-Ups", "Sit-Ups", "Triceps Dips", "Wall Sits", "Jump Lunges"],
    ),
    (
        "Martial Arts Workouts",
        &["Kickboxing", "Brazilian Jiu-Jitsu", "Muay Thai", "Boxing", "Judo"],
    ),
    (
        "Swimming Workouts",
        &["Freestyle", "Butterfly", "Backstroke", "Breaststroke", "Treading Water"],
    ),
    (
        "Dance Workouts",
        &["Zumba", "Hip-Hop Cardio", "Salsa Workouts", "Ballet Conditioning", "Bollywood Dance Fitness"],
    ),
    (
        "Endurance Training",
        &["Marathon Running", "Long-Distance Cycling", "Rowing Machine", "Swimming Laps", "Trail Running"],
    ),
    (
        "Plyometrics",
        &["Box Jumps", "Depth Jumps", "Hurdle Hops", "Plyo Push-Ups", "Bounding Drills"],
    ),
    (
        "Outdoor & Adventure Workouts",
        &["Hiking", "Rock Climbing", "Kayaking", "Skiing", "Trail Running"],
    ),
];

pub(super) static EXERCISE_STYLES: &[Section<&str>] = &[
    Section {
        name: "Martial Arts-Based Exercises (Strength + Agility)",
        items: &[
            ("Karate", "Focuses on strikes, blocks, and katas to enhance strength, coordination, and reflexes."),
            ("Taekwondo", "Emphasizes high kicks and fast movements to improve flexibility and agility."),
            ("Muay Thai", "A full-body workout involving punches, kicks, elbows, and knees to build endurance."),
            ("Judo", "A grappling sport that strengthens core muscles and improves balance."),
            ("Boxing", "Boosts stamina, reflexes, and upper-body strength through intense training."),
            ("Kickboxing", "Combines the agility of boxing and the strength of karate for a cardio-intensive workout."),
            ("Brazilian Jiu-Jitsu (BJJ)", "Focuses on ground techniques that enhance flexibility and endurance."),
            ("Krav Maga", "Real-world self-defense that integrates intense conditioning exercises."),
            ("Wrestling", "Builds muscle control and body awareness through grappling techniques."),
            ("Capoeira", "A Brazilian martial art blending dance and acrobatics for agility and fluid motion."),
        ],
    },
    Section {
        name: "Mindful & Flow-Based Exercises (Balance + Mobility)",
        items: &[
            ("Hatha Yoga", "Involves slow poses and deep breathing to promote relaxation and mindfulness."),
            ("Vinyasa Yoga", "A flow-based practice that improves endurance, flexibility, and balance."),
            ("Power Yoga", "Combines strength-building poses with dynamic movements for a full-body workout."),
            ("Restorative Yoga", "Uses props for deep relaxation and physical recovery."),
            ("Chair Yoga", "Adaptive poses designed for individuals with limited mobility."),
            ("Pilates", "Focuses on core strength, flexibility, and posture through controlled movements."),
            ("Tai Chi", "A gentle martial art that reduces stress and improves balance."),
            ("Qigong", "Integrates breath control and slow movements to improve energy flow."),
            ("Yin Yoga", "Holds passive stretches for extended periods to release deep tissue tension."),
            ("Aerial Yoga", "Uses fabric hammocks to support strength-building and flexibility exercises."),
        ],
    },
    Section {
        name: "Traditional Eastern Flow Arts (Flexibility + Energy Control)",
        items: &[
            ("Ashtanga Yoga", "Follows a structured sequence of poses to develop discipline and strength."),
            ("Bikram Yoga (Hot Yoga)", "Conducted in a heated room to promote detoxification and flexibility."),
            ("Iyengar Yoga", "Focuses on alignment and posture with the use of props."),
            ("Pranayama", "Breathing exercises aimed at increasing lung capacity and mental clarity."),
            ("Kalaripayattu", "An ancient Indian martial art that combines weapon-based and body movements."),
            ("Shaolin Kung Fu", "Incorporates intense training to improve body control and focus."),
            ("Japanese Kenjutsu", "Sword techniques that build precision, balance, and agility."),
            ("Indian Mallakhamb", "Traditional pole and rope exercises to enhance core strength."),
            ("Baguazhang", "A martial art with flowing movements to improve energy flow and coordination."),
            ("Zhan Zhuang (Standing Meditation)", "Builds endurance, stability, and focus by holding postures."),
        ],
    },
    Section {
        name: "Strength & Core-Based Disciplines (Control + Stamina)",
        items: &[
            ("Calisthenics", "A bodyweight training style focused on strength and mobility."),
            ("Street Workout", "Includes pull-ups, dips, and dynamic exercises for overall body conditioning."),
            ("CrossFit", "High-intensity workouts that enhance strength and functional fitness."),
            ("Animal Flow", "Primal movement exercises to improve agility and body coordination."),
            ("Parkour", "Involves overcoming obstacles to boost agility and functional strength."),
            ("Hand Balancing", "Challenges core and wrist strength through balancing exercises."),
            ("Plank Variations", "Strengthens the core and improves stability."),
            ("Battle Ropes", "High-intensity ropes improve endurance and upper body strength."),
            ("Kettlebell Training", "Focuses on power, strength, and coordination with kettlebell exercises."),
            ("Farmer’s Walk", "Enhances grip strength and overall core stability by carrying weights."),
        ],
    },
    Section {
        name: "Combat & Strength-Based Functional Training",
        items: &[
            ("MMA (Mixed Martial Arts)", "Combines boxing, wrestling, and ground fighting for a full-body workout."),
            ("Sandbag Training", "Develops raw power and grip strength using sand-filled bags."),
            ("Tire Flipping", "Improves explosive strength through repetitive tire movements."),
            ("Sledgehammer Workouts", "Targets endurance and coordination with sledgehammer swings."),
            ("Bulgarian Bag Training", "Enhances rotational strength using sand-filled bags."),
            ("Resistance Band Combat Drills", "Adds resistance to combat-specific movements."),
            ("Speed Drills with Parachutes", "Increases sprint speed and explosive power."),
            ("Agility Ladder Drills", "Improves quick footwork and coordination."),
            ("Sled Push/Pull", "Boosts power and lower body endurance with resistance sleds."),
            ("Olympic Lifting", "Focuses on explosive strength through powerlifting techniques."),
        ],
    },
    Section {
        name: "Explosive & Agility-Based Workouts",
        items: &[
            ("Sprint Drills", "Improves speed and endurance through high-intensity intervals."),
            ("Box Jumps", "Develops explosive lower body power and coordination."),
            ("Hurdle Drills", "Increases agility and reflexes with fast footwork exercises."),
            ("Jump Rope", "Boosts cardiovascular endurance with rhythmic skipping."),
            ("High-Knees", "Engages the core and improves leg endurance."),
            ("Plyometric Push-Ups", "Enhances upper body explosiveness through dynamic push-ups."),
            ("Depth Jumps", "Strengthens fast-twitch muscles for explosive movements."),
            ("Single-Leg Hops", "Improves balance and power with hopping exercises."),
            ("Cone Drills", "Focuses on quickness and multi-directional agility."),
            ("Hill Sprints", "Builds lower body strength through resistance running."),
        ],
    },
    Section {
        name: "Holistic & Hybrid Practices",
        items: &[
            ("Dance-Based Workouts", "A fun way to stay fit with Zumba, Hip-Hop, and other dance styles."),
            ("Barre Workouts", "Combines ballet, Pilates, and yoga for flexibility and strength."),
            ("Functional Mobility Drills", "Improves joint health and movement efficiency."),
            ("Foam Rolling & Myofascial Release", "Relieves muscle tension and improves recovery."),
            ("Breathwork Exercises", "Strengthens lung capacity and mental focus."),
            ("Stretch Therapy", "Enhances flexibility and helps prevent injuries."),
            ("TRX Suspension Training", "Uses body weight for functional strength improvement."),
            ("Aqua Workouts", "Low-impact exercises conducted in water for resistance training."),
            ("Barefoot Training", "Strengthens foot mechanics and balance."),
            ("Isometric Holds", "Builds endurance and stability by holding positions."),
        ],
    },
    Section {
        name: "Extreme Flexibility & Flow Training",
        items: &[
            ("Splits Training", "Improves flexibility for advanced movements."),
            ("Bridge Training", "Strengthens the spine and core for backbends."),
            ("Contortion Training", "Develops extreme flexibility and body control."),
            ("Scorpion Pose", "An advanced pose to enhance balance and flexibility."),
            ("Flagpole Hold", "Requires core and upper body strength for balance."),
        ],
    },
];
