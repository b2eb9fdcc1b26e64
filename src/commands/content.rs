//! Static résumé content shown by the command table and the intro banner.

use crate::output::Block;
use crate::output::Segment::{self, Accent, Link, Text};

const BLANK: &[Segment] = &[Text(" ")];

pub static BANNER: &[&str] = &[
    "                                                                                   ",
    "@@@@@@@   @@@@@@@    @@@@@@    @@@@@@   @@@  @@@      @@@@@@   @@@  @@@  @@@@@@@  ",
    "@@@@@@@@  @@@@@@@@  @@@@@@@@  @@@@@@@   @@@  @@@     @@@@@@@@  @@@@ @@@  @@@@@@@  ",
    "@@!  @@@  @@!  @@@  @@!  @@@  !@@       @@!  @@@     @@!  @@@  @@!@!@@@    @@!    ",
    "!@!  @!@  !@!  @!@  !@!  @!@  !@!       !@!  @!@     !@!  @!@  !@!!@!@!    !@!    ",
    "@!@@!@!   @!@!!@!   @!@!@!@!  !!@@!!    @!@!@!@!     @!@!@!@!  @!@ !!@!    @!!    ",
    "!!@!!!    !!@!@!    !!!@!!!!   !!@!!!   !!!@!!!!     !!!@!!!!  !@!  !!!    !!!    ",
    "!!:       !!: :!!   !!:  !!!       !:!  !!:  !!!     !!:  !!!  !!:  !!!    !!:    ",
    ":!:       :!:  !:!  :!:  !:!      !:!   :!:  !:!     :!:  !:!  :!:  !:!    :!:    ",
    " ::       ::   :::  ::   :::  :::: ::   ::   :::     ::   :::   ::   ::     ::    ",
    " :         :   : :   :   : :  :: : :     :   : :      :   : :  ::    :      :     ",
    "                                                                                  ",
];

pub static WELCOME: Block = &[
    &[Text("Welcome to my terminal portfolio! (version 1.0.0)")],
    &[Text("For a list of available commands, type `"), Accent("help"), Text("`.")],
];

pub static HELP: Block = &[
    &[Text("usage: ant [-v | --version] [-h | --help] [-ab | about] [-ex | --experience] [-s | --skills]")],
    &[Text("           [-ed | --education] [-ts | technical skills] [-aw | --awards and achievements]")],
    &[Text("           [-pr | --projects] [-vo | volunteering] [-pb | --publications] [-hb | hobbies]")],
    BLANK,
    &[Text("These are common commands used:")],
    BLANK,
    &[Text("About              A brief introduction highlighting your professional goals and experience.")],
    &[Text("Experience:        A chronological list of your past jobs, including roles, responsibilities, and accomplishments.")],
    BLANK,
    &[Text("Education:         Your academic qualifications, including degrees, institutions, and relevant coursework.")],
    &[Text("Technical Skills:  A list of technical proficiencies, programming languages, tools, and software.")],
    &[Text("Awards:            Recognition or accomplishments you've received.")],
    BLANK,
    &[Text("Projects:          Personal or professional projects you've worked on, highlighting your contributions.")],
    &[Text("Volunteering:      Community service or volunteer work experience.")],
    BLANK,
    &[Text("Skills:            A broader list of skills, including soft skills like communication, teamwork, and problem-solving.")],
    &[Text("Publications:      Any articles, papers, or books you've authored or co-authored.")],
    BLANK,
    &[Text("Hobbies:           Personal interests and activities outside of work.")],
    BLANK,
];

pub static ABOUT: Block = &[
    BLANK,
    &[Text("Adaptable and articulate Engineer with 6 year's experience in managing design and implementation of Spring Boot web services ")],
    &[Text("and well-versed in deployments, migrations, and data storage solutions. A proactive contributor who excels in delivering the right tools, ")],
    &[Text("resources, and support – at the right time. Eager to learn new things and to solve real life problems.")],
    BLANK,
];

pub static EXPERIENCE: Block = &[
    BLANK,
    &[Text("   "), Accent("Experience")],
    BLANK,
    &[Text("   "), Accent("Airtel | Senior Software Engineer (Java Backend Developer)                            Aug 2022 – present")],
    BLANK,
    &[Text("   • Led a team of 14 resources in Developing and implementing the One-EPC platform, under unified platform approach to")],
    &[Text("     centralize Product Catalog across all lines of business, replacing disparate catalog systems")],
    &[Text("   • Engineered workflows that optimized Product Lifecycle Management, cutting Go-to-Market time from 7 days to 1 day")],
    &[Text("   • Facilitated requirements gathering sessions with business stakeholders, offering innovative solutions and guiding the team")],
    &[Text("     through solutioning phases to effectively achieve project objectives")],
    &[Text("   • Managed critical channel api’s, overseeing 900+ TPS across diverse Airtel channels with 99.9% success rate under all")],
    &[Text("     order creation journey’s, significantly impacting revenue and overall working functionality")],
    &[Text("   • Spearheaded the Proof of Concept for Aerospike as a caching solution, critical for performance optimization and")],
    &[Text("     scalability of the platform, Developed cache utility service to reload cached data")],
    &[Text("   • Enhanced critical API endpoints for fetching product catalog for DTH, managing a traffic volume exceeding 30M/day")],
    &[Text("   • Built microservice which supported MyWifi functionalities over Airtel Thanks App including modem reboot, reset")],
    &[Text("     credentials, guest, optimize wifi, etc, enhancing broadband service capabilities and customer experience")],
    &[Text("   • Implemented many customer-facing APIs to manage Airtel’s broadband journey, with a traffic of over 3M requests/ day")],
    &[Text("     achieving 99.97% success rate")],
    &[Text("   • Implemented automated workflows for troubleshooting internet connectivity issues, significantly reducing resolution")],
    &[Text("     time and enhancing operational efficiency which resulted in 14% drop in SRs")],
    BLANK,
    &[Text("   "), Accent("Accenture | Application Development Analyst                                          Aug 2021 – Aug 2022")],
    BLANK,
    &[Text("   • Designed and developed Broadband provisioning system as an application aligning with business requirements and")],
    &[Text("     analyzed and enacted technical solutions")],
    &[Text("   • Developed configserver application to enhance flexibility and minimizing downtime configuration management")],
    &[Text("   • Built Autoretry module to automate retry mechanisms for technical failures, improving system resilience")],
    &[Text("   • Implemented provisioning and persist microservices for specific technical and functional requirements")],
    BLANK,
    &[Text("   "), Accent("Infosys | Senior System Engineer                                                     Jun 2018 – Aug 2021")],
    &[Text("   • Developed, and maintained critical functionality projects for Cisco, focusing on enhancing Order Processing Layer")],
    &[Text("   • Built mircroservices for importing orders from external systems, validation and data transformation before persistence")],
    &[Text("     using Java, Spring Boot, MongoDB, Kafka, etc")],
    &[Text("   • Engineered scheduler service to automate tasks, reducing manual effort by 40 Hrs/mo, improving operational efficiency")],
    &[Text("   • Led a team of 4 resources in developing the Component Business Model as part of the Order Processing Layer program.")],
    &[Text("     Managed project timelines, coordinated remote work, and collaborated closely with cross-functional teams")],
    &[Text("   • Architected and optimized workflows for diverse order types including standard hardware, software products, invoice")],
    &[Text("     items, cancel orders, etc, improving efficiency and accuracy in order processing")],
    &[Text("   • Architected and optimized workflows, Served as a subject matter expert for normalization issues in production")],
    BLANK,
    &[Text("   "), Accent("Infosys | System Engineer")],
    &[Text("   • Implemented asynchronous data processing capabilities using Kafka, significantly enhancing system scalability and")],
    &[Text("     performance in handling large volumes of hits")],
    &[Text("   • Developed complex functional scenarios for order booking journey’s, using Java, Plsql, Rest Apis, etc")],
    BLANK,
];

pub static EDUCATION: Block = &[
    BLANK,
    &[Text("   "), Accent("Education")],
    BLANK,
    &[Text("   "), Accent("TCET, Mumbai University, Mumbai                                                      July 2014 - July 2018")],
    BLANK,
    &[Text("       Bachelor of Engineering major in Electronics and Engineering (CGPA of 8.00) Mumbai MH, India")],
    BLANK,
    &[Text("       Activities and societies: Participated in Project exhibition \"I.C. The Future\", Participated in Cultural Festival \"TCET Sojourn\"")],
    &[Text("       Participated in Seminar on \"Building Professional Skills for Consultancy Environment\", Joined NSS (National Service Scheme), Joined ISTE (Indian Society for Technical Education.)")],
    BLANK,
    &[Text("   "), Accent("Royal College of Arts Science and Commerce                                           July 2012 - July 2024")],
    BLANK,
    &[Text("       Higher Secondary Education, Science:       Grade: 73.38")],
    BLANK,
    &[Text("       Activities and societies: Volleyball.")],
    BLANK,
    &[Text("   "), Accent("G.S Jangid Memorial School                                                           July 2010 - July 2012")],
    BLANK,
    &[Text("       Secondary School Certificate:              Grade: 90.73")],
    BLANK,
    &[Text("       Activities and societies: Cricket, Football, Quiz, Painting.")],
    BLANK,
];

pub static TECHNICAL_SKILLS: Block = &[
    BLANK,
    &[Text("   "), Accent("Technical Skills")],
    BLANK,
    &[Text("   "), Accent("Technologies:")],
    BLANK,
    &[Text("       Java, Python, Spring Boot, Spring MVC, Microservices, REST, Kibana, Grafana, MongoDB, AWS, PLSQL, Aerospike, Oracle,")],
    &[Text("       JUnit, Mockito, Hibernate, DBMS, JavaScript, Weblogic, Spring, Docker, JPA, OpenShift Kubernetes, Jira, Apicurio")],
    BLANK,
    &[Text("   "), Accent("Skills:")],
    BLANK,
    &[Text("       Data Structures and Algorithms(DSA), Design Patterns and System Design")],
    BLANK,
    &[Text("   "), Accent("Tools:")],
    BLANK,
    &[Text("       Postman, IntelliJ Idea, VS Code, Jira, Bitbucket, Git/GitHub, Grafana, Kibana, U-release/U-deploy, Jenkins, SQL Developer")],
    BLANK,
];

pub static CERTIFICATIONS: Block = &[
    BLANK,
    &[Text("   "), Accent("Licenses & certifications")],
    BLANK,
    &[
        Text("   "),
        Link {
            text: "Professional Cloud Architect Certification",
            href: Some("https://www.credly.com/badges/fffc0040-9986-40a7-bb31-6dba4f1fa9a3/linked_in_profile"),
        },
        Text("                  Aug 2024 - Aug 2026"),
    ],
    &[Text("   Google")],
    &[Text("   Credential ID 07213e2ec8c74af38c60950a43ae8589")],
    BLANK,
    &[Text("   "), Accent("Open Digital Framework Foundation"), Text("                           Apr 2024")],
    &[Text("   TM Forum")],
    BLANK,
    &[Text("   "), Accent("TM Forum Open API Foundation"), Text("                                Apr 2024")],
    &[Text("   TM ForumTM Forum")],
    BLANK,
    &[
        Text("   "),
        Link {
            text: "AWS Certified Developer – Associate",
            href: Some("https://www.credly.com/badges/e1852155-1a41-4ae8-b572-112dda495c4f?source=linked_in_profile"),
        },
        Text("                         Mar 2022 - Mar 2025"),
    ],
    &[Text("   Amazon Web Services (AWS)")],
    &[Text("   Credential ID 8PBRD6JLGJR1QSSK")],
    BLANK,
    &[
        Text("   "),
        Link {
            text: "AWS Certified Solutions Architect – Associate",
            href: Some("https://www.credly.com/badges/fe8a88d5-90f6-47c4-9f21-683ec0fb7a7c?source=linked_in_profile"),
        },
        Text("               Dec 2021 - Dec 2024"),
    ],
    &[Text("   Amazon Web Services (AWS)")],
    &[Text("   Credential ID E1N92JQJNE11QGS1")],
    BLANK,
];

pub static AWARDS: Block = &[
    BLANK,
    &[Text("   "), Accent("Awards and Achievements")],
    BLANK,
    &[
        Text("   • "),
        Accent("AWS Certified Solutions Architect – Associate"),
        Text(" and "),
        Accent("AWS Certified Developer – Associate"),
    ],
    &[
        Text("   • "),
        Accent("TM Forum Open API Foundation"),
        Text(" and "),
        Accent("Open Digital Framework Foundation"),
    ],
    &[
        Text("   • Awarded "),
        Accent("Best Team, 2023"),
        Text(" and "),
        Accent("Airtel Super Squad Award, 2023"),
        Text(" for performance at Airtel"),
    ],
    &[
        Text("   • Awarded "),
        Accent("Certificate of Appreciation"),
        Text(", in 2019 and 2020 for performance at Infosys"),
    ],
    &[
        Text("   • Awarded "),
        Accent("Above & Beyond Award, 2024"),
        Text(" and "),
        Accent("Broadband Excellence Awards, 2022"),
        Text(" for performance at Airtel"),
    ],
    &[Text("   • Awarded "), Accent("Insta Awards"), Text(", in 2019 and 2021 for performance at Infosys")],
    BLANK,
];

pub static PROJECTS: Block = &[
    BLANK,
    &[Text("   "), Accent("Projects")],
    BLANK,
    &[Text("   "), Accent("Enterprise Product Catalog (EPC)                                                     May 2023 - Present")],
    &[Text("   "), Accent("Associated with Airtel Digital")],
    BLANK,
    &[Text("   This is one platform which is a part of charter vision of Airtel, where the complete catalog should be modelled, maintained, federated,")],
    &[Text("   derived from one application. In the earlier Airtel world all standalone lobs maintained their own catalog and various channels had to")],
    &[Text("   derive the product information from each one of them seperately also product life cycle management process was manual and different layer.")],
    &[Text("   In the platform vision one-epc has been developed with a single mindset that all the product related information should be fetched from")],
    &[Text("   a single standalone application. Developed one-epc application compliant with TM Forum, Onbaorded these APIs on gloo, Performed Key POC")],
    &[Text("   for aerospike as a cache with desired tps. Undertook requirements from business, came with the solutioning. Lead the team for better and")],
    &[Text("   smooth deliverables. Designed and articulated the application as per business requirement to fulfill the need of the hour. To facilitate")],
    &[Text("   smooth modelling, federation process and complete lifecycle management. developed productOffering/ productOfferings Listing api to fetch")],
    &[Text("   the product details based on catalog/ lob and also support different kind of filters as per requirements from business. Onboarded various")],
    &[Text("   channels on these new apis and provided support/ assistance wherever required.")],
    BLANK,
    &[Text("   Key Deliverables")],
    &[Text("   Broabdand | Postpaid | Airfiber | IR COCP - IR on prepay | IR Inflight | Black + FWA | IR Set1 == Set2 | Black | Prepaid | D2I Booking Amount")],
    &[Text("   | DTH | Black complete modelling process | Prepaid complete admin view + modelling process + federation and approval process through workflow.")],
    BLANK,
    &[Text("   Lead a team of eighteen to deliver the platform based charter one-epc to develop and design a unified view or channel for enterprise catalogue")],
    &[Text("   through out airtel. Designed and Developed Microservices. Designed project specifications aligning with business requirements and analysed and")],
    &[Text("   enacted technical solutions. Acted as a pivotal contact for managing team throughout.")],
    BLANK,
    &[Text("   "), Accent("Skills:"), Text(" Spring Boot · Aerospike · Oracle Database · Kibana · Grafana · Apicurio · Open API · Gloo")],
    BLANK,
    &[Text("   "), Accent("Broadband | My Wifi                                                                  Aug 2022 - May 2023")],
    &[Text("   "), Accent("Associated with Airtel Digital")],
    BLANK,
    &[Text("   In Broadband configurations My Wifi is a core journey, it is a backend layer which directly interacts with different systems and also is an ")],
    &[Text("   interface between network layer applications and provides multiple functionalities in broadband configurations. Lead a team of 7 to deliver ")],
    &[Text("   the project with stringent timelines, my key responsibilities lies in understanding the requirements from business, come up with the solutioning,")],
    &[Text("   post that develop and lead the team during development activities help them during the phases and perform smooth and timely deliveries. ")],
    &[Text("   Post production deployment/ Go Live, support operations team for smooth operations onboarding also making bug free production deployment.")],
    BLANK,
    &[Text("   Key Journeys Designed and Developed: Get Device Info | Get Connected Devices | Modem Reboot | Reset Credentials | Optimize Wifi | Pause Devices ")],
    &[Text("   | Unpause Devices | Reset Credentials GuestWifi | Optimize Wifi Channel Check | Get Device History | Guest Wifi Enable/Disable | Band Wifi Enable/Disable ")],
    &[Text("   | Wifi Switch Status Check | Wifi Switch Status Enable/Disable | Get SSID List | Get Paused Devices | Get Brand Model Master | Current Channel Values ")],
    &[Text("   | Get Port Status | Get OS List | Get Connection Details | Get Access Point Info | Get Network Latency | LDAP PLAN UPDATE | Firmware upgrade | ")],
    &[Text("   Create Guest Wifi(AW) | Get Remaining Balance")],
    BLANK,
    &[Text("   "), Accent("Skills:"), Text(" Spring Boot · Solace · Oracle Database · Kibana · Grafana · Swagger")],
    BLANK,
    &[Text("   "), Accent("Network Experience Charter - Handling Network Issue                                   Dec 2022 - Mar 2023")],
    &[Text("   "), Accent("Associated with Airtel Digital")],
    BLANK,
    &[Text("   Lead a team of four people to develop and deliver the application as per project timelines. Being a team player supported team members whereever")],
    &[Text("   required. Designed project specifications aligning with business requirements and analyzed and enacted technical solutions. Developed Spring-boot")],
    &[Text("   microservices. Identification of possible reasons and actions required when a customer experiences issues in internet connectivity / slow browsing")],
    &[Text("   / frequent disconnections. With the Automation process and use of various tools – Embed UR, TR - across channels, issues can be detected automatically")],
    &[Text("   and resolved remotely. Developed various automatic flows to troubleshoot customer issues related to internet issues and then run the automated process")],
    &[Text("   to resolve the same once resolved update the same and if any other hardware issue faced and requires engineer visit then raise SR for engineers visit.")],
    BLANK,
    &[Text("   "), Accent("Skills: Spring Boot · AppDynamics · Swagger · Oracle Database · SOAP · RESTful WebServices")],
    BLANK,
    &[Text("   "), Accent("Device Nucleus                                                                       Aug 2021 - Aug 2022")],
    &[Text("   "), Accent("Associated with Accenture")],
    BLANK,
    &[Text("   Designed and Developed Microservices. Designed project specifications aligning with business requirements and analysed and enacted technical solutions.")],
    &[Text("   Developed Spring boot based microservices, config server to fetch the properties stored at an external file location, designed auto retrial module to")],
    &[Text("   automatically retry any technical failures in device nucleus system. Enhanced and implemented provisioning and persist modules for specific technical and")],
    &[Text("   functional requirements. Acted as a pivotal contact for managing any issues in production or testing and provided resolution plans throughout the project.")],
    BLANK,
    &[Text("   Lead a team of four members to fulfill the delivery timelines without any major issues and to strictly follow the project requirements.")],
    BLANK,
    &[Text("   "), Accent("Order Processing player                                                              Jan 2019 - Aug 2021")],
    &[Text("   "), Accent("Associated with Infosys, Cisco")],
    BLANK,
    &[Text("   Order Processing Layer is the central program or central layer which maintains everything from order creation to order closure under Cisco system. ")],
    &[Text("   Once the order is created and persisted into Opl system I. e. stored into no sql database, it is then processed through various functionalities and ")],
    &[Text("   validation based on product and thus the order passes through different workflow steps. At various joint point data is interfaced into other system for ")],
    &[Text("   their processing such and credit system for credit calculation or invoicing system for invoice generation, etc. once all the workflow steps are completed ")],
    &[Text("   then the order is closed. ")],
    BLANK,
    &[Text("   "), Accent("Component Business Model under OPL                                                   Jan 2019 - Aug 2021")],
    &[Text("   "), Accent("Associated with Infosys, Cisco")],
    BLANK,
    &[Text("   Component Business Model is a new project under Order Processing layer program for integrating new acquisition under Cisco from cloud to import these ")],
    &[Text("   orders into OPL system. from cloud order is imported into opl layer and then processed further based on product and update signal are sent back to cloud")],
    &[Text("   through different apis at required steps of the workflow for these orders. ")],
    BLANK,
    &[Text("   "), Accent("Secure Hashing Algorithm for Video                                                   Sep 2017 - May 2018")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   Secure Hashing Algorithm is a method or process through which the message is converted into smaller size that is it is ")],
    &[Text("   compressed it uses message digest algorithm for converting the variable length data into fixed length data and then it creates a hash value of the data")],
    &[Text("   of 160 bits length thus when the data file is opened it will require the hash value or figure print to open the data file i.e. video file in regard to ")],
    &[Text("   this paper for the receiver to view the video file. Video is a collection of data or information in itself for compressing it and then creating a hash ")],
    &[Text("   value or figure print of it and maintain its quality at the same time is a difficult task which is what this algorithm is trying to achieve.")],
    BLANK,
    &[Text("   "), Accent("Health Monitoring Sysytem                                                            May 2017 - Mar 2018")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   Health monitoring system is used for detecting the pulse rate as well as the temperature of the patient and constantly monitors it at the time interval")],
    &[Text("   of 5 sec and then stores it in the nearby device i.e. computer. micro-controller is used to control all the functions and RF transmitter and receiver ")],
    &[Text("   is used for transmission of data to the PC.")],
    BLANK,
    &[Text("   "), Accent("Rescue-Bot                                                                           Apr 2017 - Mar 2018")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   Rescue-Bot is the project which is used to detect the human being by using a wireless remote controlled Robot, which have the sensors that detects the")],
    &[Text("   presence of the human being and indicates the presence to user. As it is a wireless Robot it can be easily mobilized and can be controlled. This can be")],
    &[Text("   used to detect terrorists/thief inside the building. RF Communication ranges in between 30 KHz to 300 GHz. RF communication works by creating ")],
    &[Text("   electromagnetic waves at a source and being able to pick up those electromagnetic waves at a particular destination. These electromagnetic waves travel ")],
    &[Text("   through the air at near the speed of light. The wavelength of an electromagnetic signal is inversely proportional to the frequency i.e., the higher the ")],
    &[Text("   frequency, the shorter the wavelength. In this project we use micro controller, which is programmed to control the input and output modules interfaced to it. ")],
    &[Text("   The controller makes use of a PIR based input sensor to sense the human being and give us an alert indication. The controlling device of the whole system ")],
    &[Text("   is a Microcontroller to which RF receiver, PIR sensor and DC motors are interfaced. The remote control has control buttons interfaced to RF transmitter. ")],
    &[Text("   Whenever a button is pressed, the data related to that button will be transmitted through RF transmitter. This data will be received by RF receiver and ")],
    &[Text("   is fed to the Microcontroller. The Microcontroller processes this data and acts accordingly on Robot motors. PIR sensor is interfaced to the Microcontroller ")],
    &[Text("   which continuously monitors human presence and intimates to the controller. The controller alerts through Buzzer if human presence is present. The ")],
    &[Text("   Microcontroller is programmed using Embedded C language.")],
    BLANK,
    &[Text("   "), Accent("100W Inverter                                                                        Nov 2016 - Mar 2017")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   Inverter is a small circuit which converts the direct current (DC) to alternating current (AC). The power of a battery is converted in to main voltages.")],
    &[Text("   This power can be used for electronic appliances like television, mobile phones, computer etc. the main function of the inverter is to convert DC to AC ")],
    &[Text("   and step-up transformer is used to create main voltages from resulting AC.")],
    BLANK,
    &[Text("   "), Accent("Satellite Communication                                                              Jun 2016 - Sep 2016")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   Satellite communication using arduino and sensors to send data via receiver signal.")],
    BLANK,
    &[Text("   "), Accent("Mechanical Suspension Bridge                                                         Nov 2014 - Mar 2015")],
    &[Text("   "), Accent("Associated with University of Mumbai")],
    BLANK,
    &[Text("   It was a project for the mechanics subject. Mechanical Suspension bridge consisted of two syringes filled with fluids and a wooden structure in the shape")],
    &[Text("   of bridge and the syringes are attached on both the sides of the bridge on pushing the bottom part of the syringes the bridge pulls the strings up and ")],
    &[Text("   when the tension in the syringes are released the bridge comes down.")],
    BLANK,
];

pub static VOLUNTEERING: Block = &[
    BLANK,
    &[Text("   "), Accent("Volunteer")],
    BLANK,
    &[Text("   "), Accent("National Service Scheme                                                           Aug 2015 - May 2017")],
    &[Text("   "), Accent("Social Services")],
    BLANK,
    &[Text("   The National Service Scheme (NSS) is an Indian government-sponsored public service program conducted by the Department of Youth Affairs and Sports of ")],
    &[Text("   the Government of India. ")],
    BLANK,
    &[Text("   Successfully Participated in the events organised by NSS for the period of two years for helping those in need and with the motto of \"Not Me But You\" ")],
    &[Text("   actually making a difference. NSS helps everyone to open-up and speak in front of a crowd for the well being of not only one but the nation as a whole. ")],
    &[Text("   It takes in to appreciation of everyone's point of view and create a bond between them. ")],
    BLANK,
    &[Text("   There has been many moments during this period which I want to do again and some of them are")],
    BLANK,
    &[Text("   • Organized Blood Donation Camps.")],
    &[Text("   • Organized Free Medical Camps in Government schools to distribute free medicine, provide free health check-ups")],
    &[Text("   • Taught students at government schools")],
    &[Text("   • Presented paper for E-Waste Management.")],
    &[Text("   • Promoted and participated in Tree Plantation rally")],
    &[Text("   • Participated in many awareness rallies, cleanliness drives, medical camps")],
    &[Text("   • Performed flash mobs, rallies and street play to educate rural population")],
    &[Text("   • Promoted anti-tobacco and alcohol ban campaigns")],
    &[Text("   • Organized seminars on road safety and personal and public hygiene")],
    &[Text("   • Supported the Prime Minister's initiative, \"Swachh Bharat Abhiyan\"")],
    &[Text("   • Participated in seven-day residential camp to a remote village in Thane district of Maharashtra")],
    BLANK,
    &[Text("   "), Accent("Smile Foundation                                                                  Jan 2016 - Apr 2017")],
    &[Text("   "), Accent("Social Services")],
    &[Text("   Volunteered in Smile Foundation in 2016 and 2017, Mumbai.")],
    &[Text("   It was a joyful experience of encouraging the runners in the marathon.")],
    BLANK,
    &[Text("   "), Accent("Making A Difference (M.A.D.) Foundation                                           Oct 2016 - Apr 2017")],
    &[Text("   "), Accent("Arts and Culture")],
    BLANK,
    &[Text("   M.A.D Foundation and Mumbai First organised \"Hamara Station Hamari Shaan\" a public Private initiative which helped beautify & Transform 36 Railway ")],
    &[Text("   stations of Mumbai to celebrate the Daan Utsav week.")],
    BLANK,
    &[Text("   "), Accent("TCET MUN                                                                          Sep 2016 - Apr 2017")],
    &[Text("   "), Accent("Economic Empowerment")],
    BLANK,
    &[Text("   Worked as member of Logistics in Thakur College of Engineering & Technology Model United Nations Conference 2016.")],
    BLANK,
    &[Text("   "), Accent("Rotary Club of Bombay Kandivli                                                    Oct 2015 - Apr 2017")],
    &[Text("   "), Accent("Social Services")],
    BLANK,
    &[Text("   Rotary Club of Bombay Kandivli organised a Traffic rules awareness and management programme and Traffic police department, Mumbai gave training in ")],
    &[Text("   traffic regulation and management on rotary public safety awareness day.")],
    BLANK,
];

pub static PUBLICATIONS: Block = &[
    BLANK,
    &[Text("   "), Accent("Secure Hashing Algorithm (SHA)for Video                                  IARJSET, Jan 1, 2018")],
    &[Text("   Secure Hashing Algorithm provides the user to the knowledge of the data being manipulated as well as the hash value can be used for authentication in this way")],
    &[Text("   it provides better security to the user data files.")],
    BLANK,
    &[Text("   "), Accent("CP Connection with Spring Boot, Reading a Large Clob Response                     Jan, 2020")],
    &[Text("   Published Book of Knowledge on Configuring Hikari CP Connection with Spring Boot, Reading a Large Clob Response.")],
    BLANK,
];

pub static HOBBIES: Block = &[
    BLANK,
    &[Text("   "), Accent("Hobbies")],
    BLANK,
    &[Text("   • Reading Books • Travelling • Playing Cricket • Watching Movies • Listening to Music • Playing Chess • Playing Badminton • Playing Football")],
    &[Text("   • Watching documentaries • Watching web-series • Watching anime • Playing Video Games • Eating • Cooking • Gardening • Photography •")],
    &[Text("   • Watching Stand-up Comedy • Watching Ted Talks • Learning new things • Solving Puzzles • Painting • Writing • Reading current Affairs")],
    &[Text("   • Learning new technologies • Buidling new things • Business Analysis")],
    BLANK,
];

pub static CONTACTS: Block = &[
    BLANK,
    &[Text("   "), Accent("Contacts")],
    BLANK,
    &[
        Text("   "),
        Link { text: "Gmail", href: Some("mailto:ppandey1201@gmail.com") },
        Text("    |    "),
        Link { text: "+91 9029103637", href: None },
        Text("    |     "),
        Link { text: "linkedin", href: Some("https://www.linkedin.com/in/call-prashant") },
    ],
    BLANK,
];
